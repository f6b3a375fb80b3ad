//! Curated GCC-targeted keyword tables.
//!
//! Read-only for the life of the process; look them up with
//! [`curated_keywords`].

use super::models::Locale;

/// Number of curated keywords merged into every page's keyword list.
pub const BASE_KEYWORD_COUNT: usize = 10;

pub static GCC_KEYWORDS_EN: &[&str] = &[
    // core
    "medical tourism India",
    "healthcare Bangalore",
    "medical treatment India for GCC patients",
    "affordable medical care India",
    "JCI accredited hospitals Bangalore",
    // treatments
    "IVF treatment cost Bangalore",
    "IVF cost India vs UAE",
    "fertility treatment India for UAE patients",
    "heart surgery India for foreigners",
    "cardiac surgery cost Bangalore",
    "bypass surgery India price",
    "knee replacement cost India",
    "hip replacement India vs Gulf countries",
    "joint replacement surgery Bangalore",
    "cosmetic surgery packages India",
    "dental implants cost India",
    "cancer treatment India for UAE citizens",
    "liver transplant cost India",
    "kidney transplant India package",
    // GCC origin
    "medical tourism from UAE to India",
    "medical tourism from Saudi Arabia to India",
    "medical tourism from Kuwait to India",
    "medical visa India from UAE",
    "medical visa India from Saudi Arabia",
    "how to get medical visa India from GCC",
    // services
    "Arabic medical translator Bangalore",
    "Arabic speaking doctors India",
    "halal food hospitals Bangalore",
    "prayer facilities hospitals India",
    "medical tourism agency for GCC patients",
    "aftercare services medical tourism India",
    // cost comparison
    "medical costs India vs UAE comparison",
    "hospital room cost India vs Dubai",
    "surgery cost India vs Saudi Arabia",
    "treatment price India vs GCC",
];

pub static GCC_KEYWORDS_AR: &[&str] = &[
    "السياحة العلاجية الهند",
    "الرعاية الصحية بنغالور",
    "العلاج الطبي في الهند",
    "تكلفة علاج أطفال الأنابيب في بنغالور",
    "تكلفة أطفال الأنابيب الهند",
    "علاج تأخر الإنجاب في الهند",
    "تكلفة جراحة القلب في الهند",
    "جراحة القلب المفتوح بنغالور",
    "تكلفة استبدال الركبة الهند",
    "استبدال مفصل الورك الهند",
    "جراحات تجميل في الهند",
    "تكلفة زراعة الأسنان الهند",
    "علاج السرطان في الهند",
    "زراعة الكبد الهند",
    "السياحة العلاجية من الإمارات إلى الهند",
    "السياحة العلاجية من السعودية إلى الهند",
    "أي مستشفى أفضل لجراحة القلب في الهند",
    "كيف أحصل على فيزا طبية للهند من الإمارات",
];

/// Full curated list for a locale.
pub fn curated_keywords(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::En => GCC_KEYWORDS_EN,
        Locale::Ar => GCC_KEYWORDS_AR,
    }
}

/// Leading slice of the curated list used as a page's base keywords.
pub fn base_keywords(locale: Locale) -> &'static [&'static str] {
    let all = curated_keywords(locale);
    &all[..all.len().min(BASE_KEYWORD_COUNT)]
}
