//! Field schema and validation rules for the visitor form
//!
//! Both form variants are described by a [`FormSchema`]: the ordered field
//! list, the directory backing the recipient selector, and the copy text.

use std::str::FromStr;

use validator::ValidateLength;

use crate::error::ConfigError;
use crate::form::{FieldErrors, FieldValues};
use crate::models::{FieldId, RecipientDirectory, EMPLOYEES, RECIPIENTS};

/// Validation rule attached to a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// At least `n` characters
    MinLength(usize),
    NonEmpty,
    /// Value must be an id from the directory
    OneOf(RecipientDirectory),
    Optional,
}

impl Rule {
    pub fn check(&self, value: &str) -> bool {
        match self {
            Rule::MinLength(n) => value.validate_length(Some(*n as u64), None, None),
            Rule::NonEmpty => value.validate_length(Some(1), None, None),
            Rule::OneOf(directory) => directory.contains(value),
            Rule::Optional => true,
        }
    }
}

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Multi-line text; Enter inserts a line break instead of submitting
    TextArea,
    Select,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub rule: Rule,
    /// Shown under the field when `rule` fails
    pub message: &'static str,
}

impl FieldSpec {
    pub fn required(&self) -> bool {
        !matches!(self.rule, Rule::Optional)
    }

    pub fn kind(&self) -> FieldKind {
        match (self.id, self.rule) {
            (_, Rule::OneOf(_)) => FieldKind::Select,
            (FieldId::VisitPurpose, _) => FieldKind::TextArea,
            _ => FieldKind::Text,
        }
    }

    pub fn validate(&self, value: &str) -> Result<(), &'static str> {
        if self.rule.check(value) {
            Ok(())
        } else {
            Err(self.message)
        }
    }
}

/// Which of the two form layouts to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormVariant {
    #[default]
    Standard,
    Material,
}

impl FromStr for FormVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(FormVariant::Standard),
            "material" => Ok(FormVariant::Material),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}

/// Static text of a form variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormCopy {
    pub badge: Option<&'static str>,
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
    pub submit_label: &'static str,
    pub submitting_label: &'static str,
    pub reset_label: &'static str,
    pub footer: Option<&'static str>,
    pub success_title: &'static str,
    pub success_description: &'static str,
    /// Append a red asterisk to required labels
    pub mark_required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    pub variant: FormVariant,
    pub fields: Vec<FieldSpec>,
    pub directory: RecipientDirectory,
    pub copy: FormCopy,
}

const FULL_NAME_MESSAGE: &str = "ФИО должно содержать не менее 3 символов";
const DURATION_MESSAGE: &str = "Укажите планируемое время пребывания";
const ROOM_MESSAGE: &str = "Укажите номер кабинета";

impl FormSchema {
    pub fn for_variant(variant: FormVariant) -> Self {
        match variant {
            FormVariant::Standard => Self::standard(),
            FormVariant::Material => Self::material(),
        }
    }

    fn standard() -> Self {
        Self {
            variant: FormVariant::Standard,
            fields: vec![
                FieldSpec {
                    id: FieldId::FullName,
                    label: "ФИО Посетителя",
                    placeholder: "Введите ваше полное имя",
                    rule: Rule::MinLength(3),
                    message: FULL_NAME_MESSAGE,
                },
                FieldSpec {
                    id: FieldId::Organization,
                    label: "Из какой организации?",
                    placeholder: "Укажите вашу организацию",
                    rule: Rule::MinLength(2),
                    message: "Укажите вашу организацию",
                },
                FieldSpec {
                    id: FieldId::VisitDuration,
                    label: "Время пребывания",
                    placeholder: "Например: 1 час, 09:00-10:30",
                    rule: Rule::NonEmpty,
                    message: DURATION_MESSAGE,
                },
                FieldSpec {
                    id: FieldId::Recipient,
                    label: "Кому?",
                    placeholder: "Выберите получателя",
                    rule: Rule::OneOf(RECIPIENTS),
                    message: "Выберите получателя",
                },
                FieldSpec {
                    id: FieldId::RoomNumber,
                    label: "Кабинет №",
                    placeholder: "Укажите номер кабинета",
                    rule: Rule::NonEmpty,
                    message: ROOM_MESSAGE,
                },
            ],
            directory: RECIPIENTS,
            copy: FormCopy {
                badge: Some("Регистрация"),
                title: Some("Форма посетителя"),
                description: Some("Заполните информацию для посещения"),
                submit_label: "Отправить охраннику",
                submitting_label: "Отправка...",
                reset_label: "Очистить форму",
                footer: Some(concat!(
                    "Нажимая кнопку \"Отправить\", ",
                    "вы принимаете ответственность за предоставленную информацию",
                )),
                success_title: "Форма отправлена успешно",
                success_description: "Информация о посещении передана охраннику",
                mark_required: false,
            },
        }
    }

    fn material() -> Self {
        Self {
            variant: FormVariant::Material,
            fields: vec![
                FieldSpec {
                    id: FieldId::FullName,
                    label: "ФИО Посетителя",
                    placeholder: "Введите полное имя посетителя",
                    rule: Rule::MinLength(3),
                    message: FULL_NAME_MESSAGE,
                },
                FieldSpec {
                    id: FieldId::Organization,
                    label: "Из какой организации?",
                    placeholder: "Укажите организацию посетителя",
                    rule: Rule::MinLength(2),
                    message: "Укажите организацию посетителя",
                },
                FieldSpec {
                    id: FieldId::VisitPurpose,
                    label: "Цель визита",
                    placeholder: "Укажите цель визита",
                    rule: Rule::MinLength(3),
                    message: "Укажите цель визита",
                },
                FieldSpec {
                    id: FieldId::VisitDuration,
                    label: "Время пребывания",
                    placeholder: "Укажите планируемое время пребывания",
                    rule: Rule::NonEmpty,
                    message: DURATION_MESSAGE,
                },
                FieldSpec {
                    id: FieldId::Recipient,
                    label: "Кому?",
                    placeholder: "Выберите сотрудника",
                    rule: Rule::OneOf(EMPLOYEES),
                    message: "Выберите сотрудника",
                },
                FieldSpec {
                    id: FieldId::RoomNumber,
                    label: "Кабинет №",
                    placeholder: "Укажите номер кабинета",
                    rule: Rule::NonEmpty,
                    message: ROOM_MESSAGE,
                },
                FieldSpec {
                    id: FieldId::ResponsiblePerson,
                    label: "Под ответственность",
                    placeholder: "Укажите ответственное лицо (необязательно)",
                    rule: Rule::Optional,
                    message: "",
                },
            ],
            directory: EMPLOYEES,
            copy: FormCopy {
                badge: None,
                title: None,
                description: None,
                submit_label: "Отправить охраннику",
                submitting_label: "Отправка...",
                reset_label: "Очистить форму",
                footer: None,
                success_title: "Информация успешно отправлена",
                success_description: "Данные о посетителе переданы охраннику",
                mark_required: true,
            },
        }
    }

    pub fn field(&self, id: FieldId) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn has_field(&self, id: FieldId) -> bool {
        self.field(id).is_some()
    }

    /// Runs every field rule; missing values count as empty
    pub fn validate(&self, values: &FieldValues) -> FieldErrors {
        self.fields
            .iter()
            .filter_map(|spec| {
                let value = values.get(&spec.id).map(String::as_str).unwrap_or("");
                spec.validate(value).err().map(|message| (spec.id, message))
            })
            .collect()
    }
}
