use super::*;

#[test]
fn default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn stored_values_parse() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn missing_or_unknown_values_fall_back_to_dark() {
    assert_eq!(Theme::from_stored(None), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("Light")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("sepia")), Theme::Dark);
}

#[test]
fn toggled_flips_and_round_trips() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn as_str_round_trips_through_storage_format() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
}

#[test]
fn icons_differ_per_theme() {
    assert_eq!(Theme::Dark.icon(), "🌙");
    assert_eq!(Theme::Light.icon(), "☀️");
}

#[test]
fn storage_key_is_theme() {
    assert_eq!(STORAGE_KEY, "theme");
}
