//! 文本工具

/// 标题化：每个字母串的首字母大写，其余小写，非字母字符作为分隔
///
/// 行为对齐旧版契约里的展示格式，例如 "light rain" -> "Light Rain"、
/// "NEW york" -> "New York"、"rock'n'roll" -> "Rock'N'Roll"。
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_basic() {
        assert_eq!(title_case("light rain"), "Light Rain");
        assert_eq!(title_case("paris"), "Paris");
    }

    #[test]
    fn test_title_case_normalizes_upper() {
        assert_eq!(title_case("NEW york"), "New York");
        assert_eq!(title_case("SÃO paulo"), "São Paulo");
    }

    #[test]
    fn test_title_case_non_alpha_separators() {
        assert_eq!(title_case("rock'n'roll"), "Rock'N'Roll");
        assert_eq!(title_case("abc3de"), "Abc3De");
        assert_eq!(title_case(""), "");
    }
}
