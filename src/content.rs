//! Display content for the page. Everything here is literal copy.

use crate::components::icons::Icon;

pub const FIRM_SHORT_NAME: &str = "Araujo";
pub const FIRM_NAME: &str = "Almeida & Araujo";
pub const FOUNDED_YEAR: i32 = 2005;

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

// "12 Advogados Especialistas" is left out until the team is listed in full.
pub static HERO_STATS: [Stat; 3] = [
    Stat { value: "18+", label: "Anos de Experiência" },
    Stat { value: "500+", label: "Casos Resolvidos" },
    Stat { value: "98%", label: "Clientes Satisfeitos" },
];

pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub static SERVICES: [Service; 7] = [
    Service {
        icon: Icon::Briefcase,
        title: "Direito Civil",
        description: "Contratos, responsabilidade civil, direito imobiliário, direito do consumidor e questões familiares.",
        image: "/images/direito-civil.png",
    },
    Service {
        icon: Icon::FileText,
        title: "Direito Trabalhista",
        description: "Defesa em reclamações trabalhistas, consultoria preventiva e assessoria em negociações coletivas.",
        image: "/images/direito-trabalhista.png",
    },
    Service {
        icon: Icon::Building,
        title: "Direito Empresarial",
        description: "Constituição de empresas, contratos comerciais, fusões e aquisições, e recuperação judicial.",
        image: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=400&h=300&fit=crop&crop=center",
    },
    Service {
        icon: Icon::Users,
        title: "Direito de Família",
        description: "Divórcio, pensão alimentícia, guarda de filhos, inventários e testamentos.",
        image: "/images/direito-familia.png",
    },
    Service {
        icon: Icon::Handshake,
        title: "Mediação e Arbitragem",
        description: "Soluções alternativas de conflitos, mediação e arbitragem para resolução eficiente de disputas.",
        image: "/images/mediacao-arbitragem.png",
    },
    Service {
        icon: Icon::MessageSquare,
        title: "Consultoria Jurídica",
        description: "Assessoria jurídica preventiva para pessoas físicas e jurídicas, evitando litígios futuros.",
        image: "https://images.unsplash.com/photo-1521791136064-7986c2920216?w=400&h=300&fit=crop&crop=center",
    },
    Service {
        icon: Icon::FileText,
        title: "Registro de Marcas e Patentes",
        description: "Assessoria completa para registro e proteção de marcas, patentes e propriedade intelectual para empresas e empreendedores.",
        image: "/images/registro-marcas-patentes.png",
    },
];

pub static PRACTICE_AREAS: [&str; 12] = [
    "Direito Civil",
    "Direito Trabalhista",
    "Direito Empresarial",
    "Direito de Família",
    "Direito Imobiliário",
    "Direito do Consumidor",
    "Direito Tributário",
    "Direito Previdenciário",
    "Mediação e Arbitragem",
    "Direito Contratual",
    "Recuperação Judicial",
    "Consultoria Preventiva",
];

pub static URGENT_PERKS: [&str; 3] = ["Consulta Gratuita", "Atendimento 24h", "Resposta Rápida"];

pub struct FirmValue {
    pub icon: Icon,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub static FIRM_VALUES: [FirmValue; 4] = [
    FirmValue { icon: Icon::Scale, title: "Ética", subtitle: "Compromisso com a integridade" },
    FirmValue { icon: Icon::Users, title: "Experiência", subtitle: "Equipe especializada" },
    FirmValue { icon: Icon::CheckCircle, title: "Excelência", subtitle: "Resultados comprovados" },
    FirmValue { icon: Icon::Handshake, title: "Dedicação", subtitle: "Atendimento personalizado" },
];

pub static ABOUT_PARAGRAPHS: [&str; 3] = [
    "Fundado pelos advogados Almeida e Araujo, nosso escritório tem se destacado no cenário jurídico brasileiro por sua excelência e compromisso com os clientes há mais de 18 anos.",
    "Nosso escritório deu início com o Dr. Júlio Cesar de Almeida, advogado muito renomado e conhecido no bairro Imperial de Santa Cruz, sendo dada a continuidade por seu filho Dr. Vinicius Serra de Almeida, assim como pelo Dr. Carlos Eduardo Candido de Araujo, abrindo assim possibilidades de consultoria e assessoria jurídica a pessoas físicas e jurídicas da Região.",
    "Nossa missão é defender os interesses de nossos clientes com ética, dedicação e profissionalismo, buscando sempre os melhores resultados e construindo relacionamentos duradouros.",
];

pub struct TeamMember {
    pub name: &'static str,
    pub position: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub specialties: &'static [&'static str],
}

pub static TEAM: [TeamMember; 2] = [
    TeamMember {
        name: "Dr. Vinicius Serra de Almeida",
        position: "Sócio",
        description: "Advogado pós-graduado em Direito Constitucional, com vasta experiência profissional em escritórios de grande porte, desde 2011 nas áreas cível, trabalhista e família.",
        image: "/images/lawyer-male-1.png",
        specialties: &["Direito Civil", "Direito Trabalhista", "Direito de Família"],
    },
    TeamMember {
        name: "Dr. Carlos Eduardo Candido de Araujo",
        position: "Sócio",
        description: "Advogado pós-graduado em Direito Empresarial, com experiência profissional desde 2016 em gestão jurídica de empresas voltadas ao ramo de operadora de planos de saúde e estabelecimentos médicos.",
        image: "/images/lawyer-male-2.png",
        specialties: &["Direito Empresarial", "Legalização de Empresas", "Consultoria Jurídica"],
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub position: &'static str,
    pub text: &'static str,
    pub image: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Carlos Mendes",
        position: "Empresário",
        text: "O escritório Almeida e Araujo foi fundamental na resolução do meu caso. Profissionais extremamente competentes e atenciosos. Recomendo a todos que precisam de assistência jurídica.",
        image: "/images/client-1.png",
    },
    Testimonial {
        name: "Ana Paula Santos",
        position: "Gerente Comercial",
        text: "Excelente atendimento e profissionalismo. A Dr. Araujo conduziu meu processo trabalhista com muita competência e conseguimos um resultado muito positivo. Muito grata!",
        image: "/images/client-2.png",
    },
    Testimonial {
        name: "Roberto Oliveira",
        position: "Engenheiro",
        text: "O Dr. Almeida me auxiliou em uma questão imobiliária complexa com muita dedicação. Sua orientação foi fundamental para que eu tomasse as decisões corretas. Recomendo fortemente.",
        image: "/images/client-3.png",
    },
];

pub struct ContactDetail {
    pub icon: Icon,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub static CONTACT_DETAILS: [ContactDetail; 4] = [
    ContactDetail {
        icon: Icon::Building,
        title: "Escritório",
        lines: &[
            "Estrada Deputado Octávio Cabral 740, sala 609, Edifício Trend.",
            "Itaguaí - RJ",
            "CEP: 23.810-305",
        ],
    },
    ContactDetail { icon: Icon::Phone, title: "Telefone", lines: &["(21) 98156-5120"] },
    ContactDetail { icon: Icon::Mail, title: "Email", lines: &["caraujo.juridico@gmail.com"] },
    ContactDetail {
        icon: Icon::Clock,
        title: "Horário de Atendimento",
        lines: &[
            "Segunda a Sexta: 9h às 18h",
            "Sábados: 9h às 12h (com agendamento prévio)",
        ],
    },
];

pub static FOOTER_ADDRESS: [&str; 2] = ["Rua General Bocaiuva, 1250", "Centro, Itaguaí - RJ"];
pub const FOOTER_PHONE: &str = "(21) 3781-0000";
pub const FOOTER_EMAIL: &str = "contato@almeidaearaujo.adv.br";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::Carousel;

    #[test]
    fn carousel_covers_every_testimonial() {
        assert_eq!(Carousel::new(TESTIMONIALS.len()).len(), 3);
    }

    #[test]
    fn team_members_list_specialties() {
        assert!(TEAM.iter().all(|m| !m.specialties.is_empty()));
    }
}
