/// Named regions of the page, in nav order. The order is also the priority
/// used when deciding which section is in view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Services,
    About,
    Team,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Services,
        Section::About,
        Section::Team,
        Section::Testimonials,
        Section::Contact,
    ];

    /// DOM id of the `<section>` element, also used as the `#fragment` in links.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "inicio",
            Section::Services => "servicos",
            Section::About => "sobre",
            Section::Team => "equipe",
            Section::Testimonials => "depoimentos",
            Section::Contact => "contato",
        }
    }

    /// Label shown in the header nav: the id with its first letter capitalised.
    pub fn nav_label(self) -> String {
        let id = self.id();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Label used in the footer quick links, with proper accents.
    pub fn footer_label(self) -> &'static str {
        match self {
            Section::Home => "Início",
            Section::Services => "Serviços",
            Section::About => "Sobre",
            Section::Team => "Equipe",
            Section::Testimonials => "Depoimentos",
            Section::Contact => "Contato",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_nav_order() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["inicio", "servicos", "sobre", "equipe", "depoimentos", "contato"]);
    }

    #[test]
    fn nav_label_capitalises_first_letter() {
        assert_eq!(Section::Home.nav_label(), "Inicio");
        assert_eq!(Section::Contact.nav_label(), "Contato");
    }

    #[test]
    fn default_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn href_is_fragment() {
        assert_eq!(Section::Team.href(), "#equipe");
    }
}
