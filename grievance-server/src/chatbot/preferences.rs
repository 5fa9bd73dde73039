//! Topic preferences
//!
//! Keywords are matched as whole words, case-insensitively, over the user's
//! own messages. Topics are ranked by hit count; ties keep table order.

use shared::models::{ChatMessage, Topic, TopicPreference};

const TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (Topic::Sanitation, &["garbage", "trash", "waste", "collection"]),
    (Topic::Roads, &["road", "pothole", "street"]),
    (Topic::Water, &["water", "pipe", "leak"]),
    (Topic::Electricity, &["electricity", "power", "outage"]),
    (Topic::Education, &["school", "education", "teacher"]),
    (Topic::Safety, &["police", "crime", "safety"]),
    (Topic::Health, &["hospital", "health", "medical"]),
    (Topic::Parks, &["park", "garden", "playground"]),
];

/// Count keyword hits per topic in `text`
fn count_hits(text: &str, counts: &mut [u32]) {
    let lowered = text.to_lowercase();
    for word in lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        for (slot, (_, keywords)) in counts.iter_mut().zip(TOPIC_KEYWORDS) {
            if keywords.contains(&word) {
                *slot += 1;
            }
        }
    }
}

/// Preferred topics inferred from the user's messages
pub fn topic_preferences<'a>(
    messages: impl IntoIterator<Item = &'a ChatMessage>,
) -> Vec<TopicPreference> {
    let mut counts = vec![0u32; TOPIC_KEYWORDS.len()];
    for message in messages.into_iter().filter(|m| m.is_user()) {
        count_hits(&message.content, &mut counts);
    }

    let mut preferences: Vec<TopicPreference> = TOPIC_KEYWORDS
        .iter()
        .zip(counts)
        .filter(|(_, mentions)| *mentions > 0)
        .map(|((topic, _), mentions)| TopicPreference {
            topic: *topic,
            mentions,
        })
        .collect();
    // stable sort keeps table order on ties
    preferences.sort_by(|a, b| b.mentions.cmp(&a.mentions));
    preferences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(messages: &[ChatMessage]) -> Vec<(Topic, u32)> {
        topic_preferences(messages)
            .into_iter()
            .map(|p| (p.topic, p.mentions))
            .collect()
    }

    #[test]
    fn test_ranked_by_mentions() {
        let messages = vec![
            ChatMessage::user("There is a pothole on my road"),
            ChatMessage::user("Water pipe leak near the school, and the road again"),
        ];
        assert_eq!(
            topics(&messages),
            vec![(Topic::Roads, 3), (Topic::Water, 3), (Topic::Education, 1)]
        );
    }

    #[test]
    fn test_whole_words_only() {
        let messages = vec![ChatMessage::user("Parking near the streetlight; powerful waterfall")];
        assert!(topics(&messages).is_empty());
    }

    #[test]
    fn test_case_insensitive_and_punctuation() {
        let messages = vec![ChatMessage::user("GARBAGE! Garbage, garbage.")];
        assert_eq!(topics(&messages), vec![(Topic::Sanitation, 3)]);
    }

    #[test]
    fn test_bot_messages_ignored() {
        let messages = vec![ChatMessage::bot("Tell me about the park or the hospital")];
        assert!(topics(&messages).is_empty());
    }
}
