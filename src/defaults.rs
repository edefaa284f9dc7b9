// WHY: Built-in word tables used whenever a language has no explicit configuration
// Kept in the comma-delimited form so they go through the same splitting as user input

/// Single syllable conjunctions for English
pub const WEAK_WORDS_EN: &str =
    "a,an,the,for,and,nor,but,or,yet,so,if,than,then,as,once,till,when,shy,who,how,of,in,to,with";

/// Single syllable conjunctions for German
pub const WEAK_WORDS_DE: &str = "der,die,das,ein,an,in,am,zu,und,doch,als,ob,bis,da,daß";

/// Single syllable conjunctions and prepositions shared by Czech and Slovak
pub const WEAK_WORDS_CS: &str =
    "a,ač,aj,ak,ať,ba,co,či,do,i,k,ke,ku,o,od,pro,při,s,sa,se,si,sú,v,ve,z,za,ze,že";

/// Czech/Slovak abbreviations that must never be split across lines
pub const SHORTCUTS_CS: &[&str] = &["př. kr.", "př. n. l.", "s. r. o.", "a. s.", "v. o. s.", "o. s. ř."];

/// Units are language independent: percent/permille, typographic, metric length,
/// area, volume, mass and temperature scales
pub const UNITS: &str =
    "%,‰,px,pt,in,ft,yd,mi,mm,cm,dm,m,km,g,dkg,kg,t,ar,ha,ml,dcl,l,cm²,m²,km²,cm³,m³,°C,°F,K";

/// Language codes that ship with a built-in weak word table
pub const WEAK_WORD_LANGUAGES: &[(&str, &str)] = &[
    ("en", WEAK_WORDS_EN),
    ("de", WEAK_WORDS_DE),
    ("cs", WEAK_WORDS_CS),
    ("sk", WEAK_WORDS_CS),
];

/// Language codes that ship with built-in shortcut phrases
pub const SHORTCUT_LANGUAGES: &[(&str, &[&str])] = &[("cs", SHORTCUTS_CS), ("sk", SHORTCUTS_CS)];
