//! Cell normalizer
//!
//! Maps raw trait labels from either calculator, in Korean or English, to the
//! canonical tokens used as catalog keys. Normalization is total: unknown
//! labels produce `None` (no match) instead of an error.
//!
//! Folding rules before lookup: surrounding whitespace is trimmed, text is
//! lowercased, and runs of spaces, hyphens and underscores collapse into a
//! single `_`. House numbers get a dedicated parser accepting `7`, `7th`,
//! `h7`, `house 7`, `7하우스` and `7궁`.

use destiny_types::{Locale, TraitCategory};
use std::collections::HashMap;
use std::sync::LazyLock;

/// One vocabulary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub canonical: &'static str,
    pub en: &'static str,
    pub ko: &'static str,
    pub aliases: &'static [&'static str],
}

impl Term {
    const fn new(
        canonical: &'static str,
        en: &'static str,
        ko: &'static str,
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            canonical,
            en,
            ko,
            aliases,
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ko => self.ko,
            Locale::En => self.en,
        }
    }
}

const ELEMENTS: &[Term] = &[
    Term::new("wood", "Wood", "목", &["木", "나무"]),
    Term::new("fire", "Fire", "화", &["火", "불"]),
    Term::new("earth", "Earth", "토", &["土", "흙", "땅"]),
    Term::new("metal", "Metal", "금", &["金", "쇠", "gold"]),
    Term::new("water", "Water", "수", &["水", "물"]),
];

const WESTERN_ELEMENTS: &[Term] = &[
    Term::new("fire", "Fire", "불", &["화", "火", "fire_sign"]),
    Term::new("earth", "Earth", "흙", &["땅", "토", "土", "earth_sign"]),
    Term::new("air", "Air", "공기", &["바람", "풍", "風", "wind", "air_sign"]),
    Term::new("water", "Water", "물", &["수", "水", "water_sign"]),
];

const ROLES: &[Term] = &[
    Term::new("companion", "Companion", "비견", &["比肩", "friend", "peer", "bigyeon"]),
    Term::new("rob_wealth", "Rob Wealth", "겁재", &["劫財", "rival", "geopjae"]),
    Term::new("eating_god", "Eating God", "식신", &["食神", "food_god", "siksin"]),
    Term::new("hurting_officer", "Hurting Officer", "상관", &["傷官", "sanggwan"]),
    Term::new("indirect_wealth", "Indirect Wealth", "편재", &["偏財", "pyeonjae"]),
    Term::new("direct_wealth", "Direct Wealth", "정재", &["正財", "jeongjae"]),
    Term::new(
        "seven_killings",
        "Seven Killings",
        "편관",
        &["偏官", "七殺", "칠살", "indirect_officer", "pyeongwan"],
    ),
    Term::new("direct_officer", "Direct Officer", "정관", &["正官", "jeonggwan"]),
    Term::new("indirect_resource", "Indirect Resource", "편인", &["偏印", "owl_god", "pyeonin"]),
    Term::new("direct_resource", "Direct Resource", "정인", &["正印", "인수", "印綬", "jeongin"]),
];

const STAGES: &[Term] = &[
    Term::new("birth", "Birth", "장생", &["長生", "long_life", "jangsaeng"]),
    Term::new("bath", "Bath", "목욕", &["沐浴", "bathing", "mogyok"]),
    Term::new("crown", "Crown", "관대", &["冠帶", "cap_and_belt", "gwandae"]),
    Term::new("prosperity", "Prosperity", "건록", &["建祿", "임관", "coming_of_age", "geonrok"]),
    Term::new("peak", "Peak", "제왕", &["帝旺", "emperor", "prime", "jewang"]),
    Term::new("decline", "Decline", "쇠", &["衰", "weakening"]),
    Term::new("sickness", "Sickness", "병", &["病", "illness"]),
    Term::new("death", "Death", "사", &["死"]),
    Term::new("tomb", "Tomb", "묘", &["墓", "grave", "storage"]),
    Term::new("extinction", "Extinction", "절", &["絶", "severance", "cut_off"]),
    Term::new("conception", "Conception", "태", &["胎", "womb", "embryo"]),
    Term::new("nurture", "Nurture", "양", &["養", "nourishment"]),
];

const RELATIONS: &[Term] = &[
    Term::new(
        "stem_combine",
        "Stem Combination",
        "천간합",
        &["天干合", "간합", "stem_combination", "heavenly_stem_combination"],
    ),
    Term::new("six_combine", "Six Harmony", "육합", &["六合", "six_combination"]),
    Term::new(
        "triple_combine",
        "Triple Harmony",
        "삼합",
        &["三合", "three_harmony", "triple_combination"],
    ),
    Term::new(
        "directional_combine",
        "Directional Combination",
        "방합",
        &["方合", "seasonal_combination"],
    ),
    Term::new("clash", "Clash", "충", &["沖", "冲", "육충", "六沖"]),
    Term::new("punishment", "Punishment", "형", &["刑", "삼형", "三刑", "penalty"]),
    Term::new("harm", "Harm", "해", &["害", "육해", "六害"]),
    Term::new("destruction", "Destruction", "파", &["破", "육파", "break"]),
];

const PATTERNS: &[Term] = &[
    Term::new("direct_officer", "Direct Officer Pattern", "정관격", &["正官格"]),
    Term::new(
        "seven_killings",
        "Seven Killings Pattern",
        "편관격",
        &["偏官格", "칠살격", "七殺格"],
    ),
    Term::new("direct_wealth", "Direct Wealth Pattern", "정재격", &["正財格"]),
    Term::new("indirect_wealth", "Indirect Wealth Pattern", "편재격", &["偏財格"]),
    Term::new("eating_god", "Eating God Pattern", "식신격", &["食神格"]),
    Term::new("hurting_officer", "Hurting Officer Pattern", "상관격", &["傷官格"]),
    Term::new(
        "direct_resource",
        "Direct Resource Pattern",
        "정인격",
        &["正印格", "인수격", "印綬格"],
    ),
    Term::new("indirect_resource", "Indirect Resource Pattern", "편인격", &["偏印格"]),
    Term::new(
        "established_root",
        "Established Root Pattern",
        "건록격",
        &["建祿格", "jianlu"],
    ),
    Term::new("goat_blade", "Goat Blade Pattern", "양인격", &["羊刃格", "yangren"]),
];

const MARKERS: &[Term] = &[
    Term::new("peach_blossom", "Peach Blossom", "도화살", &["도화", "桃花", "桃花煞", "dohwa"]),
    Term::new("travel_horse", "Travelling Horse", "역마살", &["역마", "驛馬", "yeokma"]),
    Term::new("canopy", "Canopy", "화개살", &["화개", "華蓋", "art_star", "hwagae"]),
    Term::new(
        "nobleman",
        "Heavenly Nobleman",
        "천을귀인",
        &["天乙貴人", "귀인", "benefactor", "noble_person"],
    ),
    Term::new(
        "academic_star",
        "Academic Star",
        "문창귀인",
        &["문창", "文昌", "文昌貴人", "intelligence_star"],
    ),
    Term::new("red_flame", "Red Flame", "홍염살", &["홍염", "紅艶", "紅艶煞"]),
    Term::new("goat_blade", "Goat Blade", "양인살", &["양인", "羊刃", "sheep_blade"]),
    Term::new("white_tiger", "White Tiger", "백호살", &["백호", "白虎", "백호대살"]),
    Term::new("kuigang", "Kuigang", "괴강살", &["괴강", "魁罡", "goegang"]),
    Term::new("ghost_gate", "Ghost Gate", "귀문관살", &["귀문관", "귀문", "鬼門關", "gwimun"]),
];

const PLANETS: &[Term] = &[
    Term::new("sun", "Sun", "태양", &["☉", "sol"]),
    Term::new("moon", "Moon", "달", &["☽", "luna"]),
    Term::new("mercury", "Mercury", "수성", &["☿"]),
    Term::new("venus", "Venus", "금성", &["♀"]),
    Term::new("mars", "Mars", "화성", &["♂"]),
    Term::new("jupiter", "Jupiter", "목성", &["♃"]),
    Term::new("saturn", "Saturn", "토성", &["♄"]),
    Term::new("uranus", "Uranus", "천왕성", &["♅"]),
    Term::new("neptune", "Neptune", "해왕성", &["♆"]),
    Term::new("pluto", "Pluto", "명왕성", &["♇"]),
];

const SIGNS: &[Term] = &[
    Term::new("aries", "Aries", "양자리", &["백양자리", "ari", "♈"]),
    Term::new("taurus", "Taurus", "황소자리", &["tau", "♉"]),
    Term::new("gemini", "Gemini", "쌍둥이자리", &["gem", "♊"]),
    Term::new("cancer", "Cancer", "게자리", &["can", "♋"]),
    Term::new("leo", "Leo", "사자자리", &["♌"]),
    Term::new("virgo", "Virgo", "처녀자리", &["vir", "♍"]),
    Term::new("libra", "Libra", "천칭자리", &["lib", "♎"]),
    Term::new("scorpio", "Scorpio", "전갈자리", &["sco", "♏"]),
    Term::new("sagittarius", "Sagittarius", "사수자리", &["궁수자리", "sag", "♐"]),
    Term::new("capricorn", "Capricorn", "염소자리", &["cap", "♑"]),
    Term::new("aquarius", "Aquarius", "물병자리", &["aqu", "aqr", "♒"]),
    Term::new("pisces", "Pisces", "물고기자리", &["pis", "psc", "♓"]),
];

const HOUSES: &[Term] = &[
    Term::new("1", "1st House", "1하우스", &[]),
    Term::new("2", "2nd House", "2하우스", &[]),
    Term::new("3", "3rd House", "3하우스", &[]),
    Term::new("4", "4th House", "4하우스", &[]),
    Term::new("5", "5th House", "5하우스", &[]),
    Term::new("6", "6th House", "6하우스", &[]),
    Term::new("7", "7th House", "7하우스", &[]),
    Term::new("8", "8th House", "8하우스", &[]),
    Term::new("9", "9th House", "9하우스", &[]),
    Term::new("10", "10th House", "10하우스", &[]),
    Term::new("11", "11th House", "11하우스", &[]),
    Term::new("12", "12th House", "12하우스", &[]),
];

const ASPECTS: &[Term] = &[
    Term::new("conjunction", "Conjunction", "합", &["컨정션", "conj", "☌"]),
    Term::new("sextile", "Sextile", "섹스타일", &["육분", "sext", "⚹"]),
    Term::new("square", "Square", "스퀘어", &["사분", "sq", "□"]),
    Term::new("trine", "Trine", "트라인", &["삼분", "tri", "△"]),
    Term::new("opposition", "Opposition", "어포지션", &["대립", "충", "opp", "☍"]),
    Term::new("quincunx", "Quincunx", "퀸컹스", &["퀸컨스", "inconjunct", "qx"]),
];

const TRANSITS: &[Term] = &[
    Term::new("jupiter_return", "Jupiter Return", "목성 회귀", &["목성회귀"]),
    Term::new("saturn_return", "Saturn Return", "토성 회귀", &["토성회귀"]),
    Term::new("saturn_square", "Saturn Square", "토성 스퀘어", &["토성스퀘어"]),
    Term::new("saturn_opposition", "Saturn Opposition", "토성 어포지션", &["토성 대립"]),
    Term::new(
        "uranus_opposition",
        "Uranus Opposition",
        "천왕성 어포지션",
        &["천왕성 대립", "midlife_awakening"],
    ),
    Term::new("uranus_square", "Uranus Square", "천왕성 스퀘어", &["천왕성스퀘어"]),
    Term::new("neptune_square", "Neptune Square", "해왕성 스퀘어", &["해왕성스퀘어"]),
    Term::new("pluto_square", "Pluto Square", "명왕성 스퀘어", &["명왕성스퀘어"]),
    Term::new("chiron_return", "Chiron Return", "키론 회귀", &["키론회귀"]),
    Term::new(
        "node_return",
        "Nodal Return",
        "노드 회귀",
        &["노드회귀", "lunar_node_return"],
    ),
];

const MINOR_BODIES: &[Term] = &[
    Term::new("chiron", "Chiron", "키론", &["⚷"]),
    Term::new("ceres", "Ceres", "세레스", &["⚳"]),
    Term::new("pallas", "Pallas", "팔라스", &["pallas_athena", "⚴"]),
    Term::new("juno", "Juno", "주노", &["⚵"]),
    Term::new("vesta", "Vesta", "베스타", &["⚶"]),
];

const AUXILIARY_POINTS: &[Term] = &[
    Term::new(
        "north_node",
        "North Node",
        "북교점",
        &["노스노드", "true_node", "mean_node", "rahu", "dragon_head", "☊"],
    ),
    Term::new(
        "south_node",
        "South Node",
        "남교점",
        &["사우스노드", "ketu", "dragon_tail", "☋"],
    ),
    Term::new(
        "part_of_fortune",
        "Part of Fortune",
        "포르투나",
        &["행운점", "fortune", "lot_of_fortune", "pof"],
    ),
    Term::new("vertex", "Vertex", "버텍스", &["vx"]),
    Term::new(
        "lilith",
        "Black Moon Lilith",
        "릴리스",
        &["black_moon", "블랙문릴리스", "bml"],
    ),
];

/// Vocabulary of a category, in canonical order
pub fn terms(category: TraitCategory) -> &'static [Term] {
    match category {
        TraitCategory::Element => ELEMENTS,
        TraitCategory::WesternElement => WESTERN_ELEMENTS,
        TraitCategory::Role => ROLES,
        TraitCategory::Stage => STAGES,
        TraitCategory::Relation => RELATIONS,
        TraitCategory::Pattern => PATTERNS,
        TraitCategory::Marker => MARKERS,
        TraitCategory::Planet => PLANETS,
        TraitCategory::Sign => SIGNS,
        TraitCategory::House => HOUSES,
        TraitCategory::Aspect => ASPECTS,
        TraitCategory::Transit => TRANSITS,
        TraitCategory::MinorBody => MINOR_BODIES,
        TraitCategory::AuxiliaryPoint => AUXILIARY_POINTS,
    }
}

static INDEX: LazyLock<HashMap<(TraitCategory, String), &'static str>> = LazyLock::new(|| {
    let mut index = HashMap::new();
    for category in TraitCategory::ALL {
        for term in terms(category) {
            let spellings = [term.canonical, term.en, term.ko]
                .into_iter()
                .chain(term.aliases.iter().copied());
            for spelling in spellings {
                index
                    .entry((category, fold(spelling)))
                    .or_insert(term.canonical);
            }
        }
    }
    index
});

/// Canonical token for a raw label, or `None` when nothing matches
pub fn normalize(category: TraitCategory, raw: &str) -> Option<&'static str> {
    let folded = fold(raw);
    if folded.is_empty() {
        return None;
    }
    if category == TraitCategory::House {
        // Folding drops a leading '-', which would turn "-1" into house 1
        if raw.trim_start().starts_with('-') {
            return None;
        }
        return house(&folded);
    }
    INDEX.get(&(category, folded)).copied()
}

/// Whether `token` is already a canonical token of `category`
pub fn is_canonical(category: TraitCategory, token: &str) -> bool {
    term(category, token).is_some()
}

/// Vocabulary entry for a canonical token
pub fn term(category: TraitCategory, canonical: &str) -> Option<&'static Term> {
    terms(category)
        .iter()
        .find(|term| term.canonical == canonical)
}

/// Localized label for a canonical token
pub fn label(category: TraitCategory, canonical: &str, locale: Locale) -> Option<&'static str> {
    term(category, canonical).map(|term| term.label(locale))
}

fn fold(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

const HOUSE_PREFIXES: &[&str] = &["house_", "house", "h", "제"];

const HOUSE_SUFFIXES: &[&str] = &[
    "",
    "st",
    "nd",
    "rd",
    "th",
    "_house",
    "house",
    "st_house",
    "nd_house",
    "rd_house",
    "th_house",
    "하우스",
    "_하우스",
    "번째_하우스",
    "번째하우스",
    "궁",
];

fn house(folded: &str) -> Option<&'static str> {
    let body = HOUSE_PREFIXES
        .iter()
        .find_map(|prefix| folded.strip_prefix(prefix))
        .unwrap_or(folded);
    let split = body
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(body.len());
    let (digits, suffix) = body.split_at(split);
    if digits.is_empty() || digits.len() > 2 || !HOUSE_SUFFIXES.contains(&suffix) {
        return None;
    }
    let number: usize = digits.parse().ok()?;
    HOUSES.get(number.checked_sub(1)?).map(|term| term.canonical)
}
