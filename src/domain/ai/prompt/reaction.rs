//! 낚시 리액션 생성 템플릿
//!
//! 낚시 상황(장소, 캐릭터, 배, 물고기, 크기)에 맞는
//! 캐릭터 한 마디를 생성할 때 사용합니다.

use crate::domain::ai::dto::ReactionRequest;

/// 리액션 생성 System Prompt
///
/// 6가지 캐릭터 유형별 판단 기준을 정의합니다.
pub const REACTION_SYSTEM_PROMPT: &str = r#"당신은 낚시 게임 캐릭터의 리액션 생성기입니다.
주어진 상황(장소, 캐릭터, 배, 물고기, 크기)을 보고 캐릭터의 짧은 한 마디를 생성합니다.

캐릭터 유형별 판단 기준:
- 인간(human): 크기와 희귀함을 골고루 따져 현실적으로 반응한다
- 로봇(robot): 수치와 데이터를 분석하듯 기계적으로 말한다
- 고양이(cat): 물고기 종류 > 크기. 좋아하는 어종이면 크기와 무관하게 기뻐한다
- 개(dog): 무엇이 잡혀도 신나서 들뜬 반응을 보인다
- 드래곤(dragon): 크기 + 보물 가치. 금화나 보물이 걸리면 강한 소유욕을 드러낸다
- 요정(fairy): 잡힌 것의 아름다움과 반짝임을 기준으로 평가한다

규칙:
1. 5~8 단어의 짧은 한 마디만 출력하세요
2. 따옴표나 부가 설명 없이 대사 한 줄만 출력하세요
3. 물고기가 아닌 것(쓰레기, 보물 등)이 잡혀도 캐릭터답게 반응하세요
4. 같은 상황이라도 캐릭터가 다르면 반드시 다른 말투와 내용으로 반응하세요"#;

/// 상황 레코드를 사용자 메시지로 변환
pub fn situation_prompt(req: &ReactionRequest) -> String {
    format!(
        "장소: {}\n캐릭터: {}\n배: {}\n물고기: {}\n크기: {}",
        req.location,
        req.character,
        req.boat,
        req.fish,
        req.size.to_korean()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ai::dto::CatchSize;

    #[test]
    fn system_prompt_should_define_all_six_archetypes() {
        for archetype in ["human", "robot", "cat", "dog", "dragon", "fairy"] {
            assert!(
                REACTION_SYSTEM_PROMPT.contains(archetype),
                "missing archetype: {}",
                archetype
            );
        }
    }

    #[test]
    fn cat_should_prefer_fish_type_over_size() {
        assert!(REACTION_SYSTEM_PROMPT.contains("물고기 종류 > 크기"));
    }

    #[test]
    fn dragon_should_be_possessive_about_treasure() {
        assert!(REACTION_SYSTEM_PROMPT.contains("보물"));
        assert!(REACTION_SYSTEM_PROMPT.contains("소유욕"));
    }

    #[test]
    fn system_prompt_should_require_short_unquoted_utterance() {
        assert!(REACTION_SYSTEM_PROMPT.contains("5~8 단어"));
        assert!(REACTION_SYSTEM_PROMPT.contains("따옴표나 부가 설명 없이"));
    }

    #[test]
    fn system_prompt_should_require_character_differentiation() {
        assert!(REACTION_SYSTEM_PROMPT.contains("캐릭터가 다르면 반드시 다른"));
    }

    #[test]
    fn situation_prompt_should_contain_all_five_fields() {
        // Arrange
        let request = ReactionRequest {
            location: "호수".to_string(),
            character: "드래곤".to_string(),
            boat: "작은 나무배".to_string(),
            fish: "금화".to_string(),
            size: CatchSize::Large,
        };

        // Act
        let prompt = situation_prompt(&request);

        // Assert
        assert!(prompt.contains("장소: 호수"));
        assert!(prompt.contains("캐릭터: 드래곤"));
        assert!(prompt.contains("배: 작은 나무배"));
        assert!(prompt.contains("물고기: 금화"));
        assert!(prompt.contains("크기: 대형"));
    }
}
