/// 轉小寫並把連續空白壓成單一空格，只用於比對。
/// 需要行結構或大小寫的擷取器直接讀原始文字
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_folds_case_and_whitespace() {
        assert_eq!(
            normalize("  Senior  ENGINEER\n\twith 7 Years\r\n"),
            "senior engineer with 7 years"
        );
    }

    #[test]
    fn test_normalize_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_normalize_keeps_punctuation_and_unicode() {
        assert_eq!(normalize("José GARCÍA: C++, Node.js"), "josé garcía: c++, node.js");
    }
}
