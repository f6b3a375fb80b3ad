//! schema.org JSON-LD documents embedded in page heads.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::config::SiteConfig;
use crate::domain::models::Locale;

const CONTEXT: &str = "https://schema.org";
const DEFAULT_PROCEDURE_TYPE: &str = "Therapeutic";
const DEFAULT_REVIEW_COUNT: u32 = 100;

const GCC_COUNTRIES: [&str; 6] = [
    "United Arab Emirates",
    "Saudi Arabia",
    "Kuwait",
    "Oman",
    "Qatar",
    "Bahrain",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub name: String,
    /// Path below the locale root, e.g. `/treatments`.
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default)]
pub struct BlogPost {
    pub headline: String,
    pub description: String,
    pub author: String,
    pub published_date: String,
    pub modified_date: Option<String>,
    pub image: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min_price: f64,
    pub max_price: f64,
    pub currency: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct MedicalProcedure {
    pub name: String,
    pub description: String,
    pub procedure_type: Option<String>,
    pub body_location: Option<String>,
    pub preparation: Option<String>,
    pub followup: Option<String>,
    pub how_performed: Option<String>,
    pub cost: Option<PriceRange>,
}

#[derive(Debug, Clone, Default)]
pub struct Hospital {
    pub name: String,
    pub description: String,
    pub address: String,
    pub telephone: Option<String>,
    pub image: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
}

/// Insert `value` under `key` only when present.
fn insert_opt(obj: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        obj.insert(key.to_string(), Value::String(v.clone()));
    }
}

pub struct SchemaGenerator<'a> {
    config: &'a SiteConfig,
}

impl<'a> SchemaGenerator<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    pub fn breadcrumb(&self, items: &[BreadcrumbItem], locale: Locale) -> Value {
        let elements: Vec<Value> = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                json!({
                    "@type": "ListItem",
                    "position": index + 1,
                    "name": item.name,
                    "item": format!("{}/{}{}", self.config.base_url, locale.as_str(), item.url),
                })
            })
            .collect();

        json!({
            "@context": CONTEXT,
            "@type": "BreadcrumbList",
            "itemListElement": elements,
        })
    }

    pub fn faq(&self, faqs: &[FaqItem]) -> Value {
        let entities: Vec<Value> = faqs
            .iter()
            .map(|faq| {
                json!({
                    "@type": "Question",
                    "name": faq.question,
                    "acceptedAnswer": { "@type": "Answer", "text": faq.answer },
                })
            })
            .collect();

        json!({
            "@context": CONTEXT,
            "@type": "FAQPage",
            "mainEntity": entities,
        })
    }

    pub fn blog_post(&self, post: &BlogPost) -> Value {
        json!({
            "@context": CONTEXT,
            "@type": "BlogPosting",
            "headline": post.headline,
            "description": post.description,
            "image": post.image,
            "author": { "@type": "Person", "name": post.author },
            "publisher": {
                "@type": "Organization",
                "name": self.config.name,
                "logo": {
                    "@type": "ImageObject",
                    "url": format!("{}/logo.png", self.config.base_url),
                },
            },
            "datePublished": post.published_date,
            "dateModified": post.modified_date.as_deref().unwrap_or(&post.published_date),
            "mainEntityOfPage": { "@type": "WebPage", "@id": post.url },
        })
    }

    pub fn medical_procedure(&self, procedure: &MedicalProcedure) -> Value {
        let mut schema = json!({
            "@context": CONTEXT,
            "@type": "MedicalProcedure",
            "name": procedure.name,
            "description": procedure.description,
            "procedureType": procedure
                .procedure_type
                .as_deref()
                .unwrap_or(DEFAULT_PROCEDURE_TYPE),
        });

        if let Some(obj) = schema.as_object_mut() {
            insert_opt(obj, "bodyLocation", &procedure.body_location);
            insert_opt(obj, "preparation", &procedure.preparation);
            insert_opt(obj, "followup", &procedure.followup);
            insert_opt(obj, "howPerformed", &procedure.how_performed);

            if let Some(cost) = procedure.cost {
                obj.insert(
                    "offers".to_string(),
                    json!({
                        "@type": "Offer",
                        "priceSpecification": {
                            "@type": "PriceSpecification",
                            "minPrice": cost.min_price,
                            "maxPrice": cost.max_price,
                            "priceCurrency": cost.currency,
                        },
                    }),
                );
            }
        }
        schema
    }

    pub fn hospital(&self, hospital: &Hospital) -> Value {
        let mut schema = json!({
            "@context": CONTEXT,
            "@type": "Hospital",
            "name": hospital.name,
            "description": hospital.description,
            "image": hospital
                .image
                .clone()
                .unwrap_or_else(|| format!("{}/hospitals/default.jpg", self.config.base_url)),
            "address": {
                "@type": "PostalAddress",
                "streetAddress": hospital.address,
                "addressLocality": "Bangalore",
                "addressRegion": "Karnataka",
                "addressCountry": "IN",
            },
        });

        if let Some(obj) = schema.as_object_mut() {
            insert_opt(obj, "telephone", &hospital.telephone);
            if let Some(rating) = hospital.rating {
                obj.insert(
                    "aggregateRating".to_string(),
                    json!({
                        "@type": "AggregateRating",
                        "ratingValue": rating,
                        "reviewCount": hospital.review_count.unwrap_or(DEFAULT_REVIEW_COUNT),
                        "bestRating": 5,
                    }),
                );
            }
        }
        schema
    }

    pub fn organization(&self) -> Value {
        let base = &self.config.base_url;
        let areas: Vec<Value> = GCC_COUNTRIES
            .iter()
            .map(|name| json!({ "@type": "Country", "name": name }))
            .collect();

        json!({
            "@context": CONTEXT,
            "@type": "MedicalBusiness",
            "@id": format!("{}/#organization", base),
            "name": self.config.name,
            "alternateName": self.config.name_ar,
            "url": base,
            "logo": {
                "@type": "ImageObject",
                "url": format!("{}/logo.png", base),
                "width": 512,
                "height": 512,
            },
            "image": {
                "@type": "ImageObject",
                "url": self.config.absolute_og_image(),
                "width": 1200,
                "height": 630,
            },
            "areaServed": areas,
            "availableLanguage": ["English", "Arabic"],
        })
    }
}
