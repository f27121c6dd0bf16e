pub const WHATSAPP_NUMBER: &str = "5521981565120";
pub const WHATSAPP_GREETING: &str = "Olá! Gostaria de agendar uma consulta jurídica.";

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/almeidaearaujo_advocacia";

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3673.8881856027283!2d-43.77944232475417!3d-22.95169237919761!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x9be00b2ddcb3b3%3A0x5c1e4e9f34e9c4c0!2sR.%20Gen.%20Bocai%C3%BAvaf0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x9be00b2ddcb3b3%3A0x5c1e4e9f34e9c4c0!2sR.%20Gen.%20Bocai%C3%BAva%20-%20Centro%2C%20Itagua%C3%AD%20-%20RJ!5e0!3m2!1spt-BR!2sbr!4v1716318547971!5m2!1spt-BR!2sbr";

pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        number,
        urlencoding::encode(message)
    )
}

pub fn whatsapp_greeting_link() -> String {
    whatsapp_link(WHATSAPP_NUMBER, WHATSAPP_GREETING)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialNetwork {
    Instagram,
    Facebook,
    LinkedIn,
    YouTube,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub url: &'static str,
}

impl SocialNetwork {
    pub fn label(self) -> &'static str {
        match self {
            SocialNetwork::Instagram => "Instagram",
            SocialNetwork::Facebook => "Facebook",
            SocialNetwork::LinkedIn => "LinkedIn",
            SocialNetwork::YouTube => "YouTube",
        }
    }
}

// Only Instagram has a live profile for now.
pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { network: SocialNetwork::Instagram, url: INSTAGRAM_URL },
    SocialLink { network: SocialNetwork::Facebook, url: "#" },
    SocialLink { network: SocialNetwork::LinkedIn, url: "#" },
    SocialLink { network: SocialNetwork::YouTube, url: "#" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_message() {
        assert_eq!(
            whatsapp_link("5521981565120", "Olá! Tudo bem?"),
            "https://wa.me/5521981565120?text=Ol%C3%A1%21%20Tudo%20bem%3F"
        );
    }

    #[test]
    fn greeting_link_targets_firm_number() {
        let link = whatsapp_greeting_link();
        assert!(link.starts_with("https://wa.me/5521981565120?text="));
        assert!(!link.contains(' '));
    }

    #[test]
    fn instagram_is_first_social_link() {
        assert_eq!(SOCIAL_LINKS[0].network, SocialNetwork::Instagram);
        assert_eq!(SOCIAL_LINKS[0].url, INSTAGRAM_URL);
    }
}
