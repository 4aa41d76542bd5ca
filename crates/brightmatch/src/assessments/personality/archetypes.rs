use serde::Serialize;

use super::code::PersonalityCode;

/// Display copy for a personality code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Archetype {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Indexed by `PersonalityCode::index`.
static ARCHETYPES: [Archetype; 16] = [
    Archetype {
        code: "ESTJ",
        name: "The Executive",
        description: "Organized, practical, and decisive. You are excellent at managing people and projects to achieve concrete results.",
    },
    Archetype {
        code: "ESTP",
        name: "The Entrepreneur",
        description: "Smart, energetic, and perceptive. You are excellent at reading situations and adapting quickly to new challenges.",
    },
    Archetype {
        code: "ESFJ",
        name: "The Consul",
        description: "Caring, social, and popular. You are highly attuned to others' needs and work hard to maintain harmony.",
    },
    Archetype {
        code: "ESFP",
        name: "The Entertainer",
        description: "Spontaneous, enthusiastic, and playful. You love being around people and bringing joy to others.",
    },
    Archetype {
        code: "ENTJ",
        name: "The Commander",
        description: "Bold, imaginative, and strong-willed leaders. You naturally take charge and inspire others to achieve ambitious goals.",
    },
    Archetype {
        code: "ENTP",
        name: "The Debater",
        description: "Smart, curious, and able to debate any topic. You thrive on intellectual challenges and generating new ideas.",
    },
    Archetype {
        code: "ENFJ",
        name: "The Protagonist",
        description: "Charismatic, inspiring, and natural leaders. You have an exceptional ability to motivate and guide others.",
    },
    Archetype {
        code: "ENFP",
        name: "The Campaigner",
        description: "Enthusiastic, creative, and sociable. You see life as full of possibilities and inspire others with your optimism.",
    },
    Archetype {
        code: "ISTJ",
        name: "The Logistician",
        description: "Practical, fact-minded, and reliable. You value tradition, loyalty, and hard work, and you always follow through.",
    },
    Archetype {
        code: "ISTP",
        name: "The Virtuoso",
        description: "Bold, practical, and experimental. You are a master of tools and techniques, always ready to explore and build.",
    },
    Archetype {
        code: "ISFJ",
        name: "The Protector",
        description: "Warm-hearted, conscientious, and cooperative. You are dedicated to helping others and creating harmony.",
    },
    Archetype {
        code: "ISFP",
        name: "The Adventurer",
        description: "Charming, sensitive, and artistic. You live in the moment and are always ready to explore new possibilities.",
    },
    Archetype {
        code: "INTJ",
        name: "The Architect",
        description: "Strategic, independent, and highly competent. You have a natural ability to see the big picture and create long-term plans.",
    },
    Archetype {
        code: "INTP",
        name: "The Thinker",
        description: "Innovative, independent, and strategic. You love exploring theoretical concepts and understanding how things work.",
    },
    Archetype {
        code: "INFJ",
        name: "The Advocate",
        description: "Creative, insightful, and principled. You have a strong sense of purpose and care deeply about making a positive impact.",
    },
    Archetype {
        code: "INFP",
        name: "The Mediator",
        description: "Poetic, kind, and altruistic. You are guided by your values and have a deep desire to help others and make the world better.",
    },
];

pub fn archetype(code: PersonalityCode) -> &'static Archetype {
    &ARCHETYPES[code.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_has_matching_archetype() {
        for code in PersonalityCode::ALL {
            let entry = archetype(code);
            assert_eq!(entry.code, code.as_str());
            assert!(entry.name.starts_with("The "));
            assert!(!entry.description.is_empty());
        }
    }
}
