use proptest::prelude::*;

use quillrs::persona::PERSONA_PRESETS;
use quillrs::request::MIN_POST_LENGTH;
use quillrs::{FormState, build_prompt};

proptest! {
    #[test]
    fn length_never_drops_below_minimum(words in any::<u32>()) {
        let mut form = FormState::default();
        form.set_length(words);
        prop_assert!(form.length() >= MIN_POST_LENGTH);
        prop_assert_eq!(form.length(), words.max(MIN_POST_LENGTH));
    }

    #[test]
    fn any_topic_with_text_yields_a_valid_request(
        topic in "[A-Za-z][A-Za-z0-9 ]{0,40}",
        words in any::<u32>(),
        preset in 0..PERSONA_PRESETS.len(),
    ) {
        let mut form = FormState::default();
        form.topic = topic.clone();
        form.set_length(words);
        form.select_persona_preset(PERSONA_PRESETS[preset].key).unwrap();

        let request = form.to_request().unwrap();
        prop_assert!(request.validate().is_ok());
        prop_assert_eq!(request.persona.is_some(), !PERSONA_PRESETS[preset].is_custom());

        let parts = build_prompt(&request);
        let expected_topic = format!("Topic: \"{}\"", topic);
        prop_assert!(parts.user_prompt.contains(&expected_topic));
        let expected_length = format!("approximately {} words.", request.length);
        prop_assert!(parts.system_instruction.contains(&expected_length));
    }
}
