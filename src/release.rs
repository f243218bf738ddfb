//! Deterministic naming for age notifications.

/// Release name derived from the minimum age. A given age always yields the
/// same name, which is what makes membership in the previously published
/// titles a valid duplicate check.
pub fn release_name(minimum_age: u32) -> String {
    format!("vacina-para-{}-anos-ou-mais", minimum_age)
}

/// Human-readable release body announcing the new minimum age.
pub fn release_message(minimum_age: u32) -> String {
    format!(
        "A vacina está agora disponível para quem tenha {} ou mais anos de idade.",
        minimum_age
    )
}
