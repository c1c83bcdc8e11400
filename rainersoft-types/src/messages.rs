//! Static translation tables.
//!
//! Templates use `{name}` placeholders filled by [`interpolate`].

/// Localized strings for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    // Field names
    pub field_email: &'static str,
    pub field_password: &'static str,
    pub field_username: &'static str,
    pub field_slug: &'static str,
    pub field_url: &'static str,
    pub field_phone: &'static str,
    pub field_message: &'static str,
    pub field_cpf: &'static str,
    pub field_cnpj: &'static str,

    // Generic
    pub required: &'static str,
    pub too_short: &'static str,
    pub too_long: &'static str,

    // Specific validators
    pub email_invalid: &'static str,
    pub password_min_length: &'static str,
    pub password_uppercase: &'static str,
    pub password_lowercase: &'static str,
    pub password_number: &'static str,
    pub password_special: &'static str,
    pub username_length: &'static str,
    pub username_chars: &'static str,
    pub slug_length: &'static str,
    pub slug_chars: &'static str,
    pub url_invalid: &'static str,
    pub phone_invalid: &'static str,
    pub cpf_invalid: &'static str,
    pub cnpj_invalid: &'static str,

    // Password strength
    pub strength_very_weak: &'static str,
    pub strength_weak: &'static str,
    pub strength_fair: &'static str,
    pub strength_good: &'static str,
    pub strength_strong: &'static str,
    pub hint_length: &'static str,
    pub hint_lowercase: &'static str,
    pub hint_uppercase: &'static str,
    pub hint_number: &'static str,
    pub hint_special: &'static str,
    pub hint_common: &'static str,
}

pub(crate) const PT_BR: Messages = Messages {
    field_email: "Email",
    field_password: "Senha",
    field_username: "Nome de usuário",
    field_slug: "Slug",
    field_url: "URL",
    field_phone: "Telefone",
    field_message: "Mensagem",
    field_cpf: "CPF",
    field_cnpj: "CNPJ",

    required: "{field} é obrigatório",
    too_short: "{field} deve ter pelo menos {min} caracteres",
    too_long: "{field} deve ter no máximo {max} caracteres",

    email_invalid: "Email inválido",
    password_min_length: "A senha deve ter pelo menos {min} caracteres",
    password_uppercase: "A senha deve conter pelo menos uma letra maiúscula",
    password_lowercase: "A senha deve conter pelo menos uma letra minúscula",
    password_number: "A senha deve conter pelo menos um número",
    password_special: "A senha deve conter pelo menos um caractere especial",
    username_length: "O nome de usuário deve ter entre {min} e {max} caracteres",
    username_chars: "O nome de usuário pode conter apenas letras, números, _ e -",
    slug_length: "O slug deve ter entre {min} e {max} caracteres",
    slug_chars: "O slug pode conter apenas letras minúsculas, números e hífens",
    url_invalid: "URL inválida",
    phone_invalid: "Telefone inválido",
    cpf_invalid: "CPF inválido",
    cnpj_invalid: "CNPJ inválido",

    strength_very_weak: "Muito fraca",
    strength_weak: "Fraca",
    strength_fair: "Razoável",
    strength_good: "Boa",
    strength_strong: "Forte",
    hint_length: "Use pelo menos 12 caracteres",
    hint_lowercase: "Adicione letras minúsculas",
    hint_uppercase: "Adicione letras maiúsculas",
    hint_number: "Adicione números",
    hint_special: "Adicione caracteres especiais",
    hint_common: "Evite sequências e palavras comuns",
};

pub(crate) const EN_US: Messages = Messages {
    field_email: "Email",
    field_password: "Password",
    field_username: "Username",
    field_slug: "Slug",
    field_url: "URL",
    field_phone: "Phone",
    field_message: "Message",
    field_cpf: "CPF",
    field_cnpj: "CNPJ",

    required: "{field} is required",
    too_short: "{field} must be at least {min} characters",
    too_long: "{field} must be at most {max} characters",

    email_invalid: "Invalid email",
    password_min_length: "Password must be at least {min} characters",
    password_uppercase: "Password must contain at least one uppercase letter",
    password_lowercase: "Password must contain at least one lowercase letter",
    password_number: "Password must contain at least one number",
    password_special: "Password must contain at least one special character",
    username_length: "Username must be between {min} and {max} characters",
    username_chars: "Username may only contain letters, numbers, _ and -",
    slug_length: "Slug must be between {min} and {max} characters",
    slug_chars: "Slug may only contain lowercase letters, numbers and hyphens",
    url_invalid: "Invalid URL",
    phone_invalid: "Invalid phone number",
    cpf_invalid: "Invalid CPF",
    cnpj_invalid: "Invalid CNPJ",

    strength_very_weak: "Very weak",
    strength_weak: "Weak",
    strength_fair: "Fair",
    strength_good: "Good",
    strength_strong: "Strong",
    hint_length: "Use at least 12 characters",
    hint_lowercase: "Add lowercase letters",
    hint_uppercase: "Add uppercase letters",
    hint_number: "Add numbers",
    hint_special: "Add special characters",
    hint_common: "Avoid sequences and common words",
};

pub(crate) const ES_ES: Messages = Messages {
    field_email: "Correo electrónico",
    field_password: "Contraseña",
    field_username: "Nombre de usuario",
    field_slug: "Slug",
    field_url: "URL",
    field_phone: "Teléfono",
    field_message: "Mensaje",
    field_cpf: "CPF",
    field_cnpj: "CNPJ",

    required: "{field} es obligatorio",
    too_short: "{field} debe tener al menos {min} caracteres",
    too_long: "{field} debe tener como máximo {max} caracteres",

    email_invalid: "Correo electrónico no válido",
    password_min_length: "La contraseña debe tener al menos {min} caracteres",
    password_uppercase: "La contraseña debe contener al menos una letra mayúscula",
    password_lowercase: "La contraseña debe contener al menos una letra minúscula",
    password_number: "La contraseña debe contener al menos un número",
    password_special: "La contraseña debe contener al menos un carácter especial",
    username_length: "El nombre de usuario debe tener entre {min} y {max} caracteres",
    username_chars: "El nombre de usuario solo puede contener letras, números, _ y -",
    slug_length: "El slug debe tener entre {min} y {max} caracteres",
    slug_chars: "El slug solo puede contener letras minúsculas, números y guiones",
    url_invalid: "URL no válida",
    phone_invalid: "Teléfono no válido",
    cpf_invalid: "CPF no válido",
    cnpj_invalid: "CNPJ no válido",

    strength_very_weak: "Muy débil",
    strength_weak: "Débil",
    strength_fair: "Aceptable",
    strength_good: "Buena",
    strength_strong: "Fuerte",
    hint_length: "Usa al menos 12 caracteres",
    hint_lowercase: "Añade letras minúsculas",
    hint_uppercase: "Añade letras mayúsculas",
    hint_number: "Añade números",
    hint_special: "Añade caracteres especiales",
    hint_common: "Evita secuencias y palabras comunes",
};

/// Replaces `{key}` placeholders with the given values.
///
/// Unknown placeholders are left intact, and substituted values are never
/// re-scanned, so a value containing `{x}` is inserted literally.
#[must_use]
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let key = &after[..end];
                match args.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
