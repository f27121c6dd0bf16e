use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Civil,
    Trabalhista,
    Empresarial,
    Familia,
    Mediacao,
    Consultoria,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 6] = [
        ServiceCategory::Civil,
        ServiceCategory::Trabalhista,
        ServiceCategory::Empresarial,
        ServiceCategory::Familia,
        ServiceCategory::Mediacao,
        ServiceCategory::Consultoria,
    ];

    /// Value of the `<option>` element.
    pub fn value(self) -> &'static str {
        match self {
            ServiceCategory::Civil => "civil",
            ServiceCategory::Trabalhista => "trabalhista",
            ServiceCategory::Empresarial => "empresarial",
            ServiceCategory::Familia => "familia",
            ServiceCategory::Mediacao => "mediacao",
            ServiceCategory::Consultoria => "consultoria",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceCategory::Civil => "Direito Civil",
            ServiceCategory::Trabalhista => "Direito Trabalhista",
            ServiceCategory::Empresarial => "Direito Empresarial",
            ServiceCategory::Familia => "Direito de Família",
            ServiceCategory::Mediacao => "Mediação e Arbitragem",
            ServiceCategory::Consultoria => "Consultoria Jurídica",
        }
    }

    /// The empty placeholder option maps to `None`.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }
}

/// What the contact form collects. Nothing sends it yet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: Option<ServiceCategory>,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactForm {
    pub fn with_field(&self, field: ContactField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            ContactField::Name => next.name = value,
            ContactField::Email => next.email = value,
            ContactField::Phone => next.phone = value,
            ContactField::Message => next.message = value,
        }
        next
    }

    pub fn with_service(&self, value: &str) -> Self {
        Self {
            service: ServiceCategory::from_value(value),
            ..self.clone()
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.email.trim().is_empty()
            && self.phone.trim().is_empty()
            && self.service.is_none()
            && self.message.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_values_round_trip() {
        for category in ServiceCategory::ALL {
            assert_eq!(ServiceCategory::from_value(category.value()), Some(category));
        }
        assert_eq!(ServiceCategory::from_value(""), None);
    }

    #[test]
    fn serialized_category_matches_option_value() {
        let json = serde_json::to_string(&ServiceCategory::Familia).unwrap();
        assert_eq!(json, "\"familia\"");
    }

    #[test]
    fn field_updates_touch_one_field() {
        let form = ContactForm::default()
            .with_field(ContactField::Name, "Ana".to_string())
            .with_service("trabalhista");
        assert_eq!(form.name, "Ana");
        assert_eq!(form.service, Some(ServiceCategory::Trabalhista));
        assert!(form.email.is_empty());
        assert!(!form.is_blank());
        assert!(ContactForm::default().is_blank());
    }

    #[test]
    fn placeholder_selection_clears_service() {
        let form = ContactForm::default().with_service("civil").with_service("");
        assert_eq!(form.service, None);
    }

    #[test]
    fn payload_serializes_as_json() {
        let form = ContactForm {
            name: "Carlos".into(),
            email: "carlos@exemplo.com".into(),
            phone: "(21) 00000-0000".into(),
            service: Some(ServiceCategory::Civil),
            message: "Preciso de ajuda".into(),
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["service"], "civil");
        assert_eq!(value["phone"], "(21) 00000-0000");
    }
}
