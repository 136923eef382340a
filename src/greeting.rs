pub struct Greeter {
    default_message: String,
}

impl Greeter {
    pub fn new(default_message: String) -> Self {
        Self { default_message }
    }

    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(config.greeting.default_message.clone())
    }

    #[tracing::instrument(name = "generating greeting", skip(self))]
    pub fn greet(&self, name: Option<&str>) -> String {
        match name.map(str::trim) {
            Some(name) if !name.is_empty() => format!("Hello, {name}!"),
            _ => self.default_message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use fake::{faker::name::en::FirstName, Fake};
    use quickcheck_macros::quickcheck;

    use super::Greeter;

    fn greeter() -> Greeter {
        Greeter::new("Hello, World!".into())
    }

    #[test]
    fn absent_name_yields_default_message() {
        assert_eq!("Hello, World!", greeter().greet(None));
    }

    #[test]
    fn empty_name_yields_default_message() {
        assert_eq!("Hello, World!", greeter().greet(Some("")));
    }

    #[test]
    fn whitespace_name_yields_default_message() {
        assert_eq!("Hello, World!", greeter().greet(Some("   ")));
    }

    #[test]
    fn name_is_greeted() {
        assert_eq!("Hello, John!", greeter().greet(Some("John")));
    }

    #[test]
    fn name_is_trimmed() {
        assert_eq!("Hello, Jane!", greeter().greet(Some("  Jane  ")));
    }

    #[test]
    fn fake_names_are_greeted() {
        let greeter = greeter();
        for _ in 0..10 {
            let name: String = FirstName().fake();
            assert_eq!(format!("Hello, {name}!"), greeter.greet(Some(&name)));
        }
    }

    #[quickcheck]
    fn greeting_is_pure(name: Option<String>) -> bool {
        let greeter = greeter();
        greeter.greet(name.as_deref()) == greeter.greet(name.as_deref())
    }

    #[quickcheck]
    fn blank_names_fall_back_others_are_trimmed(name: String) -> bool {
        let trimmed = name.trim();
        let expected = if trimmed.is_empty() {
            "Hello, World!".to_string()
        } else {
            format!("Hello, {trimmed}!")
        };

        expected == greeter().greet(Some(&name))
    }
}
