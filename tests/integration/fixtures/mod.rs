// Golden input/output pairs for the default tables and the &nbsp; marker
// WHY: Golden testing requires deterministic input/output pairs for validation

/// (language, input, expected output)
pub const GOLDEN_CASES: &[(&str, &str, &str)] = &[
    ("en", "I saw a dog", "I saw a&nbsp;dog"),
    ("en", "A dog ran", "A&nbsp;dog ran"),
    ("en", "Once upon a time, the king\tand\tthe queen", "Once&nbsp;upon a&nbsp;time, the&nbsp;king and&nbsp;the&nbsp;queen"),
    ("en", "The pool holds 50 m³ of water at 25 °C", "The&nbsp;pool holds 50&nbsp;m³ of&nbsp;water at 25&nbsp;°C"),
    ("en", "Population: 1 234 567 people", "Population: 1&nbsp;234&nbsp;567 people"),
    ("de", "Ein Haus am See", "Ein&nbsp;Haus am&nbsp;See"),
    ("cs", "Byl to a. s. ve městě", "Byl to a.&nbsp;s. ve&nbsp;městě"),
    ("cs", "Narodil se roku 50 př. n. l.", "Narodil se&nbsp;roku 50 př.&nbsp;n.&nbsp;l."),
    ("cs", "Ať žije 100 % nadšení", "Ať&nbsp;žije 100&nbsp;% nadšení"),
];
