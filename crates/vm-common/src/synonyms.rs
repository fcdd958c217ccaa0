use std::collections::HashMap;
use std::sync::LazyLock;

use strsim::damerau_levenshtein;

/// Skill concepts with their bilingual (Albanian / English) synonym phrases.
///
/// NOTE: keep this table in sync with the seed vocabulary used by the
/// profile setup form.
pub(crate) const SKILL_CONCEPTS: &[(&str, &[&str])] = &[
    (
        "programim",
        &[
            "zhvillim softuer",
            "kodim",
            "programues",
            "programming",
            "software development",
            "coding",
        ],
    ),
    (
        "dizajn",
        &[
            "dizajn grafik",
            "grafikë",
            "dizajn uebi",
            "illustrim",
            "design",
            "graphic design",
        ],
    ),
    (
        "mësimdhënie",
        &[
            "mësues",
            "edukim",
            "trajner",
            "profesor",
            "teaching",
            "tutoring",
            "education",
        ],
    ),
    (
        "përkthim",
        &[
            "gjuhë të huaja",
            "përkthyes",
            "interpretues",
            "anglisht",
            "translation",
            "languages",
            "interpreting",
        ],
    ),
    (
        "marketing",
        &["media sociale", "reklamim", "promocion", "social media", "advertising"],
    ),
    (
        "kontabilitet",
        &["financa", "regjistrime", "bilance", "accounting", "finance", "bookkeeping"],
    ),
    (
        "mjekësi",
        &[
            "infermieri",
            "kujdes shëndetësor",
            "farmaci",
            "medicine",
            "nursing",
            "first aid",
        ],
    ),
    ("gazetari", &["shkrim", "raportim", "media", "journalism", "writing"]),
    (
        "drejtësi",
        &["avokat", "konsulencë ligjore", "ligj", "law", "legal advice"],
    ),
    (
        "inxhinieri",
        &["ndërtim", "mekanikë", "elektronikë", "engineering", "construction"],
    ),
    ("bujqësi", &["fermë", "kultivim", "agronomi", "farming", "agriculture"]),
    ("gatim", &["kuzhinë", "ushqim", "shef", "cooking", "food preparation"]),
    ("muzikë", &["instrument", "këndim", "kompozim", "music", "singing"]),
    ("fotografi", &["kamera", "video", "editim", "photography", "videography"]),
    (
        "menaxhim",
        &[
            "lidership",
            "organizim",
            "planifikim",
            "udhëheqje",
            "management",
            "leadership",
            "organizing",
        ],
    ),
    ("kërkim", &["analizë", "studim", "hulumtim", "research", "analysis"]),
    (
        "psikologji",
        &["këshillim", "terapi", "mbështetje", "psychology", "counseling"],
    ),
    ("sport", &["trajnim", "fitnes", "ushtrime", "sports", "coaching", "fitness"]),
    ("art", &["pikturë", "skulpturë", "krijim", "arts", "painting"]),
    (
        "teknologji",
        &["it", "harduer", "softuer", "kompjuter", "technology", "computers"],
    ),
];

/// Interest concepts, same shape as [`SKILL_CONCEPTS`].
pub(crate) const INTEREST_CONCEPTS: &[(&str, &[&str])] = &[
    (
        "mjedis",
        &[
            "natyrë",
            "ekologji",
            "mbrojtje mjedisi",
            "gjelbërim",
            "environment",
            "nature",
            "ecology",
        ],
    ),
    (
        "edukim",
        &[
            "arsim",
            "dije",
            "mësim",
            "zhvillim personal",
            "education",
            "learning",
            "school",
        ],
    ),
    (
        "shëndetësi",
        &[
            "kujdes shëndetësor",
            "mirëqenie",
            "shëndet publik",
            "health",
            "healthcare",
            "wellbeing",
        ],
    ),
    (
        "kulturë",
        &["trashëgimi", "traditë", "diversitet", "culture", "heritage"],
    ),
    (
        "bamirësi",
        &[
            "ndihmë",
            "mbështetje",
            "solidaritet",
            "humanizëm",
            "charity",
            "humanitarian aid",
        ],
    ),
    (
        "fëmijë",
        &["të rinj", "edukim fëmijësh", "rini", "children", "kids", "youth"],
    ),
    (
        "të moshuarit",
        &["kujdes për të moshuarit", "përkrahje", "elderly", "elderly care"],
    ),
    (
        "kafshë",
        &["mbrojtje kafshësh", "veterinari", "strehim", "animals", "animal welfare"],
    ),
    (
        "zhvillim komunitar",
        &[
            "komunitet",
            "përmirësim",
            "infrastrukturë",
            "community",
            "community development",
        ],
    ),
    (
        "emigracion",
        &["refugjatë", "integrim", "migration", "refugees", "integration"],
    ),
    ("turizëm", &["udhëtime", "guidë", "promovim", "tourism", "travel"]),
    ("histori", &["trashëgimi", "arkeologji", "ruajtje", "history", "archaeology"]),
    (
        "internet",
        &["media sociale", "përmbajtje online", "akses digjital", "digital access"],
    ),
];

/// Place-name aliases, so "Tirana" and "Tiranë" resolve to the same city.
pub(crate) const PLACE_ALIASES: &[(&str, &[&str])] = &[
    ("tirane", &["tirana", "tiranë"]),
    ("durres", &["durrës", "durrësi", "durazzo"]),
    ("shkoder", &["shkodra", "shkodër"]),
    ("vlore", &["vlora", "vlorë"]),
    ("korce", &["korça", "korçë"]),
    ("lushnje", &["lushnja", "lushnjë"]),
];

/// Token -> every concept it appears under, as key or as synonym. A token
/// may legitimately sit in more than one list ("edukim" is an interest
/// concept and a teaching synonym), so equivalence checks shared membership
/// rather than collapsing to a single canonical form.
static TOKEN_CONCEPTS: LazyLock<HashMap<&'static str, Vec<&'static str>>> = LazyLock::new(|| {
    let mut map: HashMap<&'static str, Vec<&'static str>> = HashMap::new();
    for table in [SKILL_CONCEPTS, INTEREST_CONCEPTS, PLACE_ALIASES] {
        for (concept, aliases) in table {
            map.entry(*concept).or_default().push(*concept);
            for alias in *aliases {
                map.entry(*alias).or_default().push(*concept);
            }
        }
    }
    map
});

/// Resolve a normalized token to its primary concept, if the dictionary
/// knows it. Falls back to a guarded Damerau-Levenshtein pass so small typos
/// ("programimi" for "programim") still resolve; short tokens are exempt
/// from the fuzzy pass to limit false positives.
pub fn canonical_concept(token: &str) -> Option<&'static str> {
    if token.is_empty() {
        return None;
    }
    if let Some(concepts) = TOKEN_CONCEPTS.get(token) {
        return concepts.first().copied();
    }
    fuzzy_concept(token)
}

fn fuzzy_concept(token: &str) -> Option<&'static str> {
    if token.chars().count() < 5 {
        return None;
    }

    let mut best: Option<(&'static str, usize)> = None;
    for (alias, concepts) in TOKEN_CONCEPTS.iter() {
        if alias.chars().count() < 5 {
            continue;
        }

        let distance = damerau_levenshtein(token, alias);
        let len = token.chars().count().max(alias.chars().count());
        let acceptable = distance == 1 || (len >= 8 && distance == 2);
        if !acceptable {
            continue;
        }

        match best {
            None => best = Some((concepts[0], distance)),
            Some((_, best_dist)) if distance < best_dist => best = Some((concepts[0], distance)),
            _ => {}
        }
    }

    best.map(|(concept, _)| concept)
}

fn concepts_of(token: &str) -> &[&'static str] {
    TOKEN_CONCEPTS
        .get(token)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Heuristic equivalence over two normalized tokens.
///
/// This is a lossy textual approximation, not a semantic model: substring
/// containment treats compound phrases as overlapping with their head terms
/// and is known to over-match on very short tokens.
pub fn are_equivalent(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a == b {
        return true;
    }
    if a.contains(b) || b.contains(a) {
        return true;
    }

    let concepts_a = concepts_of(a);
    if !concepts_a.is_empty() && concepts_of(b).iter().any(|c| concepts_a.contains(c)) {
        return true;
    }

    // Typo'd tokens still meet through the fuzzy resolver.
    if let (Some(x), Some(y)) = (canonical_concept(a), canonical_concept(b)) {
        return x == y;
    }
    false
}
