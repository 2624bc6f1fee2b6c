//! 모델 출력 정리
//!
//! 내용 자체는 건드리지 않고, 모델이 붙이는 설명성 래핑(코드 펜스,
//! 라벨, 따옴표, 공백)만 제거합니다.

/// 출력 앞에 붙는 라벨 접두사
const LABEL_PREFIXES: [&str; 5] = ["Prompt:", "prompt:", "프롬프트:", "Output:", "출력:"];

/// 짝을 이루는 래핑 따옴표
const QUOTE_PAIRS: [(char, char); 5] = [
    ('"', '"'),
    ('\'', '\''),
    ('\u{201C}', '\u{201D}'), // “ ”
    ('\u{2018}', '\u{2019}'), // ‘ ’
    ('「', '」'),
];

/// 코드 펜스, 라벨, 래핑 따옴표, 둘레 공백을 제거
pub fn strip_wrapping(raw: &str) -> String {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        // 언어 태그(```text 등)는 첫 줄에만 올 수 있다. 한 줄짜리 펜스에서
        // 첫 단어를 태그로 오인해 지우면 안 된다.
        let rest = match rest.find('\n') {
            Some(idx) if rest[..idx].trim_end().chars().all(|c| c.is_ascii_alphanumeric()) => {
                &rest[idx..]
            }
            _ => rest,
        };
        let rest = rest.strip_suffix("```").unwrap_or(rest);
        text = rest.trim();
    }

    for label in LABEL_PREFIXES {
        if let Some(rest) = text.strip_prefix(label) {
            text = rest.trim_start();
            break;
        }
    }

    strip_surrounding_quotes(text).to_string()
}

/// 리액션 출력 정리: 래핑 제거 후 첫 번째 비어있지 않은 줄만 반환
pub fn clean_reaction(raw: &str) -> String {
    let cleaned = strip_wrapping(raw);

    cleaned
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| strip_surrounding_quotes(line).to_string())
        .unwrap_or_default()
}

/// 양 끝의 짝이 맞는 따옴표 한 겹을 제거
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let trimmed = s.trim();

    for (open, close) in QUOTE_PAIRS {
        if trimmed.len() >= open.len_utf8() + close.len_utf8()
            && trimmed.starts_with(open)
            && trimmed.ends_with(close)
        {
            return trimmed[open.len_utf8()..trimmed.len() - close.len_utf8()].trim();
        }
    }

    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_wrapping_should_trim_whitespace() {
        assert_eq!(strip_wrapping("  blue fish, pixel art  \n"), "blue fish, pixel art");
    }

    #[test]
    fn strip_wrapping_should_remove_code_fence() {
        let raw = "```\nsmall fish, blue scales, pixel art\n```";

        assert_eq!(strip_wrapping(raw), "small fish, blue scales, pixel art");
    }

    #[test]
    fn strip_wrapping_should_remove_code_fence_with_language_tag() {
        let raw = "```text\nold boat, wooden hull, retro style\n```";

        assert_eq!(strip_wrapping(raw), "old boat, wooden hull, retro style");
    }

    #[test]
    fn strip_wrapping_should_keep_first_keyword_in_single_line_fence() {
        // 한 줄짜리 펜스의 첫 단어는 언어 태그가 아니라 출력 내용이다
        let raw = "```blue fish, shiny scales, pixel art```";

        assert_eq!(strip_wrapping(raw), "blue fish, shiny scales, pixel art");
    }

    #[test]
    fn strip_wrapping_should_remove_label_prefix() {
        assert_eq!(strip_wrapping("Prompt: golden coin, shiny"), "golden coin, shiny");
        assert_eq!(strip_wrapping("프롬프트: golden coin, shiny"), "golden coin, shiny");
    }

    #[test]
    fn strip_wrapping_should_leave_plain_output_unchanged() {
        let raw = "dragon, huge wings, fantasy style";

        assert_eq!(strip_wrapping(raw), raw);
    }

    #[test]
    fn strip_surrounding_quotes_should_remove_ascii_quotes() {
        assert_eq!(strip_surrounding_quotes("\"내 금화다!\""), "내 금화다!");
        assert_eq!(strip_surrounding_quotes("'월척이다!'"), "월척이다!");
    }

    #[test]
    fn strip_surrounding_quotes_should_remove_curly_quotes() {
        assert_eq!(strip_surrounding_quotes("\u{201C}반짝반짝 예쁘다\u{201D}"), "반짝반짝 예쁘다");
    }

    #[test]
    fn strip_surrounding_quotes_should_keep_inner_quotes() {
        // 양 끝이 짝을 이룰 때만 제거
        assert_eq!(strip_surrounding_quotes("그가 \"월척\"이라 했다"), "그가 \"월척\"이라 했다");
    }

    #[test]
    fn strip_surrounding_quotes_should_handle_single_quote_char() {
        assert_eq!(strip_surrounding_quotes("\""), "\"");
    }

    #[test]
    fn clean_reaction_should_take_first_non_empty_line() {
        let raw = "\n\n내 보물이다, 건드리지 마!\n(드래곤이 으르렁거린다)";

        assert_eq!(clean_reaction(raw), "내 보물이다, 건드리지 마!");
    }

    #[test]
    fn clean_reaction_should_remove_quotes_and_fence_together() {
        let raw = "```\n\"이 정도 크기면 나쁘지 않군\"\n```";

        assert_eq!(clean_reaction(raw), "이 정도 크기면 나쁘지 않군");
    }

    #[test]
    fn clean_reaction_should_return_empty_for_blank_output() {
        assert_eq!(clean_reaction("   \n  "), "");
    }
}
