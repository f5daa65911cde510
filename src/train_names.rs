/// Human-readable names for known train numbers, shown beside results.
/// Numbers outside the table (and the "N/A" sentinel) have no name and are
/// displayed as-is.
pub fn lookup(train_no: &str) -> Option<&'static str> {
    let digits: String = train_no.chars().filter(|c| c.is_ascii_digit()).collect();
    let name = match digits.as_str() {
        "12723" => "Godavari Express",
        "12711" => "Simhadri Express",
        "12733" => "Narasimha Express",
        "12761" => "Padmavati Express",
        "12762" => "Visakha Express",
        "12759" => "Charminar Express",
        "12578" => "Bagmati Express",
        "12603" => "Hyderabad Express",
        "12712" => "Pinakini Express",
        "12705" => "Hussainsagar Express",
        "12679" => "Cocanada Express",
        "12798" => "Venkatadri Express",
        "12805" => "Janmabhoomi Express",
        "12863" => "Howrah Express",
        "12754" => "Nagarjuna Express",
        "12737" => "Goutami Express",
        "12669" => "Gangavaram Express",
        "12604" => "Chennai Express",
        "12786" => "Tirumala Express",
        "12713" => "Satavahana Express",
        "12706" => "Amaravati Express",
        "12680" => "Intercity Express",
        "12799" => "Rayalaseema Express",
        "12806" => "East Coast Express",
        "12864" => "Coromandel Express",
        "12755" => "Krishna Express",
        "12738" => "Godavari Express",
        "12610" => "Chennai Express",
        "12714" => "Sabari Express",
        "12760" => "Charminar Express",
        "12616" => "GT Express",
        "12539" => "YPR Express",
        "12295" => "Sanghamitra Express",
        _ => return None,
    };
    Some(name)
}

/// "12723" -> "12723 (Godavari Express)"; unnamed numbers stay bare.
pub fn display(train_no: &str) -> String {
    match lookup(train_no) {
        Some(name) => format!("{} ({})", train_no, name),
        None => train_no.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_number_resolves() {
        assert_eq!(lookup("12723"), Some("Godavari Express"));
        assert_eq!(display("12723"), "12723 (Godavari Express)");
    }

    #[test]
    fn number_is_extracted_from_decorated_values() {
        assert_eq!(lookup("Train 12706"), Some("Amaravati Express"));
    }

    #[test]
    fn unknown_and_sentinel_stay_bare() {
        assert_eq!(lookup("99999"), None);
        assert_eq!(lookup("N/A"), None);
        assert_eq!(display("N/A"), "N/A");
    }
}
