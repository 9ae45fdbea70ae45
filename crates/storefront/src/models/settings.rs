//! Site settings edited from the admin panel.

use serde::{Deserialize, Serialize};

/// Site-wide settings rendered by the frontend.
///
/// Stored as one JSONB document; [`Default`] carries the launch copy used
/// until an admin saves a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub site_name: String,
    pub logo_url: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub about_text: String,
    pub contact_email: String,
    #[serde(default)]
    pub social_links: SocialLinks,
    pub newsletter_text: String,
    pub footer_text: String,
}

/// Social profile links shown in the footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "LaviBaby".to_owned(),
            logo_url: String::new(),
            hero_title: "Roupas que fazem os pequenos brilharem".to_owned(),
            hero_subtitle: "Descubra nossa coleção exclusiva de roupas infantis. Conforto, \
                            estilo e qualidade para os momentos especiais dos seus pequenos."
                .to_owned(),
            about_text: "Somos uma loja especializada em roupas infantis que combina estilo, \
                         conforto e qualidade."
                .to_owned(),
            contact_email: "contato@lavibaby.com.br".to_owned(),
            social_links: SocialLinks {
                instagram: Some("@lavibaby".to_owned()),
                ..SocialLinks::default()
            },
            newsletter_text: "Receba novidades e ofertas exclusivas.".to_owned(),
            footer_text: "© LaviBaby. Todos os direitos reservados.".to_owned(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_document_roundtrip() {
        let settings = SiteSettings::default();
        let value = serde_json::to_value(&settings).unwrap();
        let parsed: SiteSettings = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_missing_social_links_defaults() {
        let json = serde_json::json!({
            "site_name": "LaviBaby",
            "logo_url": "",
            "hero_title": "t",
            "hero_subtitle": "s",
            "about_text": "a",
            "contact_email": "contato@lavibaby.com.br",
            "newsletter_text": "n",
            "footer_text": "f",
        });
        let parsed: SiteSettings = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.social_links, SocialLinks::default());
    }
}
