use crate::domain::model::PersonName;

/// A valid line carries at most three given names plus one last name.
pub const MAX_TOKENS: usize = 4;
pub const MIN_TOKENS: usize = 2;

/// Parses the full text of an input file into name records, in line order.
///
/// Each line is trimmed and split on whitespace runs. Blank lines and lines
/// with fewer than two or more than four tokens are dropped without error;
/// the last token becomes the last name, everything before it the given
/// names.
pub fn parse_names(content: &str) -> Vec<PersonName> {
    let mut names = Vec::new();

    for line in content.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens.is_empty() {
            tracing::debug!("Skipping blank line");
            continue;
        }

        if tokens.len() < MIN_TOKENS || tokens.len() > MAX_TOKENS {
            tracing::warn!("Skipping invalid line: {}", line.trim());
            continue;
        }

        let (given, last) = tokens.split_at(tokens.len() - 1);
        names.push(PersonName::new(
            given.iter().map(|s| s.to_string()).collect(),
            last[0],
        ));
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lines_in_order() {
        let names = parse_names("Sachin Tendulkar\nJohnny Zohar\n");
        assert_eq!(names.len(), 2);
        assert_eq!(names[0].to_string(), "Sachin Tendulkar");
        assert_eq!(names[1].to_string(), "Johnny Zohar");
    }

    #[test]
    fn trims_and_collapses_whitespace() {
        let names = parse_names("  John   Smith  \n Alice   Wonderland ");
        assert_eq!(names[0].to_string(), "John Smith");
        assert_eq!(names[1].to_string(), "Alice Wonderland");
    }

    #[test]
    fn skips_blank_lines() {
        let names = parse_names("\nJohn Smith\n   \nAlice Wonderland\n");
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn skips_single_token_lines() {
        let names = parse_names("Michael\nMichael Jordan\n");
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].to_string(), "Michael Jordan");
    }

    #[test]
    fn skips_lines_with_too_many_tokens() {
        let names = parse_names("Alice Bob Carol Dee Smith\nJohn Middle Smith\n");
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].to_string(), "John Middle Smith");
    }

    #[test]
    fn keeps_three_given_names() {
        let names = parse_names("Alice Bob Carol Smith\n");
        assert_eq!(names.len(), 1);
        assert_eq!(
            names[0].given_names,
            vec!["Alice".to_string(), "Bob".to_string(), "Carol".to_string()]
        );
        assert_eq!(names[0].last_name, "Smith");
    }

    #[test]
    fn empty_content_yields_no_names() {
        assert!(parse_names("").is_empty());
    }

    #[test]
    fn handles_crlf_line_endings() {
        let names = parse_names("John Smith\r\nAlice Wonderland\r\n");
        assert_eq!(names.len(), 2);
        assert_eq!(names[1].last_name, "Wonderland");
    }
}
