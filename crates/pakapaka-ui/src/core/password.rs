//! Password field visibility.

/// Whether a password input shows its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldVisibility {
    /// `type="password"`, slashed eye.
    Masked,
    /// `type="text"`, plain eye.
    Plain,
}

impl FieldVisibility {
    /// Read the visibility from an input's `type` attribute. Anything other
    /// than `password` counts as plain.
    #[must_use]
    pub fn from_input_type(input_type: Option<&str>) -> Self {
        match input_type {
            Some("password") => Self::Masked,
            _ => Self::Plain,
        }
    }

    /// The opposite visibility.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::Plain,
            Self::Plain => Self::Masked,
        }
    }

    /// `type` attribute value for this visibility.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Masked => "password",
            Self::Plain => "text",
        }
    }

    /// Full class list of the eye icon for this visibility.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Masked => "fa-regular fa-eye-slash",
            Self::Plain => "fa-solid fa-eye",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FieldVisibility;

    #[test]
    fn masked_field_reveals_on_toggle() {
        let next = FieldVisibility::from_input_type(Some("password")).toggled();
        assert_eq!(next, FieldVisibility::Plain);
        assert_eq!(next.input_type(), "text");
        assert_eq!(next.icon_class(), "fa-solid fa-eye");
    }

    #[test]
    fn second_toggle_restores_mask() {
        let next = FieldVisibility::from_input_type(Some("text")).toggled();
        assert_eq!(next.input_type(), "password");
        assert_eq!(next.icon_class(), "fa-regular fa-eye-slash");
    }

    #[test]
    fn missing_type_is_treated_as_plain() {
        assert_eq!(
            FieldVisibility::from_input_type(None),
            FieldVisibility::Plain
        );
    }
}
