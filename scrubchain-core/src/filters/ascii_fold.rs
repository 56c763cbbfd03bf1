//! ASCII transliteration.
//!
//! [`AsciiFold`] is the seam behind the `ascii` and `slug` filters. The engine
//! holds one implementation and hands it to every built-in that needs it, so a
//! caller with stricter transliteration needs can swap in their own table.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Transliterates text towards ASCII.
///
/// Implementations replace characters they know with ASCII look-alikes and leave
/// everything else in place. Removing what is left over is the caller's job.
pub trait AsciiFold: Send + Sync {
    fn fold(&self, input: &str) -> String;
}

/// Table-driven transliteration covering Latin, Greek, Cyrillic, Arabic,
/// Georgian, Myanmar and Devanagari letters, Persian and Arabic-Indic digits,
/// superscript and subscript digits, and the Unicode space characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultAsciiFold;

impl AsciiFold for DefaultAsciiFold {
    fn fold(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        'outer: while let Some(c) = rest.chars().next() {
            for (sequence, replacement) in FOLD_SEQUENCES {
                if let Some(tail) = rest.strip_prefix(*sequence) {
                    out.push_str(replacement);
                    rest = tail;
                    continue 'outer;
                }
            }
            match FOLD_TABLE.get(&c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            }
            rest = &rest[c.len_utf8()..];
        }
        out
    }
}

/// Folds with `folder`, then drops everything outside printable ASCII.
pub fn ascii(input: &str, folder: &dyn AsciiFold) -> String {
    folder
        .fold(input)
        .chars()
        .filter(|c| (' '..='~').contains(c))
        .collect()
}

// Earlier rows win when a character is listed twice.
const FOLD_ROWS: &[(&str, &str)] = &[
    ("0", "°₀۰"),
    ("1", "¹₁۱"),
    ("2", "²₂۲"),
    ("3", "³₃۳"),
    ("4", "⁴₄۴٤"),
    ("5", "⁵₅۵٥"),
    ("6", "⁶₆۶٦"),
    ("7", "⁷₇۷"),
    ("8", "⁸₈۸"),
    ("9", "⁹₉۹"),
    ("a", "àáảãạăắằẳẵặâấầẩẫậāąåäαάἀἁἂἃἄἅἆἇᾀᾁᾂᾃᾄᾅᾆᾇὰάᾰᾱᾲᾳᾴᾶᾷаأအာါǻǎªაअا"),
    ("b", "бβЪЬبဗბ"),
    ("c", "çćčĉċ"),
    ("d", "ďðđƌȡɖɗᵭᶁᶑдδدضဍဒდ"),
    ("e", "éèẻẽẹêếềểễệëēęěĕėεέἐἑἒἓἔἕὲέеёэєəဧေဲეएإئ"),
    ("f", "фφفƒფ"),
    ("g", "ĝğġģгґγဂგگ"),
    ("h", "ĥħηήحهဟှჰ"),
    ("i", "íìỉĩịîïīĭįıιίϊΐἰἱἲἳἴἵἶἷὶίῐῑῒΐῖῗіїиဣိီǐიइ"),
    ("j", "ĵјЈჯج"),
    ("k", "ķĸкκĶقكကკქک"),
    ("l", "łľĺļŀлλلလლ"),
    ("m", "мμمမმ"),
    ("n", "ñńňņŉŋνнنနნ"),
    ("o", "öóòỏõọôốồổỗộơớờởỡợøōőŏοὀὁὂὃὄὅὸόоوθǒǿºოओ"),
    ("p", "пπပპپ"),
    ("q", "ყ"),
    ("r", "ŕřŗрρرრ"),
    ("s", "śšşсσșςسصစſს"),
    ("t", "ťţтτțتطဋတŧთტ"),
    ("u", "úùủũụưứừửữựûūůűŭųµуဉုူǔǖǘǚǜუउ"),
    ("v", "вვϐ"),
    ("w", "ŵωώဝွ"),
    ("x", "χξ"),
    ("y", "ýỳỷỹỵÿŷйыυϋύΰيယ"),
    ("z", "źžżзζزဇზ"),
    ("aa", "عआآ"),
    ("ae", "æǽ"),
    ("ai", "ऐ"),
    ("at", "@"),
    ("ch", "чჩჭچ"),
    ("dj", "ђđ"),
    ("dz", "џძ"),
    ("ei", "ऍ"),
    ("gh", "غღ"),
    ("ii", "ई"),
    ("ij", "ĳ"),
    ("kh", "хخხ"),
    ("lj", "љ"),
    ("nj", "њ"),
    ("oe", "œؤ"),
    ("oi", "ऑ"),
    ("oii", "ऒ"),
    ("ps", "ψ"),
    ("sh", "шშش"),
    ("shch", "щ"),
    ("ss", "ß"),
    ("sx", "ŝ"),
    ("th", "þϑثذظ"),
    ("ts", "цცწ"),
    ("ue", "ü"),
    ("uu", "ऊ"),
    ("ya", "я"),
    ("yu", "ю"),
    ("zh", "жჟژ"),
    ("(c)", "©"),
    ("A", "ÁÀẢÃẠĂẮẰẲẴẶÂẤẦẨẪẬÅÄĀĄΑΆἈἉἊἋἌἍἎἏᾈᾉᾊᾋᾌᾍᾎᾏᾸᾹᾺΆᾼАǺǍ"),
    ("B", "БΒब"),
    ("C", "ÇĆČĈĊ"),
    ("D", "ĎÐĐƉƊƋᴅᴆДΔ"),
    ("E", "ÉÈẺẼẸÊẾỀỂỄỆËĒĘĚĔĖΕΈἘἙἚἛἜἝΈῈЕЁЭЄƏ"),
    ("F", "ФΦ"),
    ("G", "ĞĠĢГҐΓ"),
    ("H", "ΗΉĦ"),
    ("I", "ÍÌỈĨỊÎÏĪĬĮİΙΊΪἸἹἻἼἽἾἿῘῙῚΊИІЇǏϒ"),
    ("K", "КΚ"),
    ("L", "ĹŁЛΛĻĽĿल"),
    ("M", "МΜ"),
    ("N", "ŃÑŇŅŊНΝ"),
    ("O", "ÖÓÒỎÕỌÔỐỒỔỖỘƠỚỜỞỠỢØŌŐŎΟΌὈὉὊὋὌὍῸΌОΘӨǑǾ"),
    ("P", "ПΠ"),
    ("R", "ŘŔРΡŖ"),
    ("S", "ŞŜȘŠŚСΣ"),
    ("T", "ŤŢŦȚТΤ"),
    ("U", "ÚÙỦŨỤƯỨỪỬỮỰÛŪŮŰŬŲУǓǕǗǙǛ"),
    ("V", "В"),
    ("W", "ΩΏŴ"),
    ("X", "ΧΞ"),
    ("Y", "ÝỲỶỸỴŸῨῩῪΎЫЙΥΫŶ"),
    ("Z", "ŹŽŻЗΖ"),
    ("AE", "ÆǼ"),
    ("CH", "Ч"),
    ("DJ", "Ђ"),
    ("DZ", "Џ"),
    ("GX", "Ĝ"),
    ("HX", "Ĥ"),
    ("IJ", "Ĳ"),
    ("JX", "Ĵ"),
    ("KH", "Х"),
    ("LJ", "Љ"),
    ("NJ", "Њ"),
    ("OE", "Œ"),
    ("PS", "Ψ"),
    ("SH", "Ш"),
    ("SHCH", "Щ"),
    ("SS", "ẞ"),
    ("TH", "Þ"),
    ("TS", "Ц"),
    ("UE", "Ü"),
    ("YA", "Я"),
    ("YU", "Ю"),
    ("ZH", "Ж"),
    (
        " ",
        "\u{00A0}\u{2000}\u{2001}\u{2002}\u{2003}\u{2004}\u{2005}\u{2006}\u{2007}\u{2008}\u{2009}\u{200A}\u{202F}\u{205F}\u{3000}",
    ),
];

// Marks that combine into one letter, matched before single characters.
const FOLD_SEQUENCES: &[(&str, &str)] = &[("ည်", "i"), ("ို", "o")];

static FOLD_TABLE: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for (replacement, sources) in FOLD_ROWS {
        for c in sources.chars() {
            table.entry(c).or_insert(*replacement);
        }
    }
    table
});
