use super::domain::{AnswerIndex, Question};
use super::personality::Dichotomy;

/// Fixed question bank for one assessment.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn iq() -> Self {
        Self {
            questions: iq_questions(),
        }
    }

    pub fn eq() -> Self {
        Self {
            questions: eq_questions(),
        }
    }

    pub fn personality() -> Self {
        Self {
            questions: personality_questions(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions_for(&self, dichotomy: Dichotomy) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.dimension == Some(dichotomy))
            .collect()
    }

    /// Answer sheet that picks the keyed option on every IQ item.
    pub fn answer_key(&self) -> Vec<AnswerIndex> {
        self.questions
            .iter()
            .map(|question| question.correct_answer_index.unwrap_or(0) as AnswerIndex)
            .collect()
    }
}

fn entry(id: usize, text: &str, options: &[&str]) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
        dimension: None,
        correct_answer_index: None,
    }
}

fn keyed(id: usize, text: &str, options: &[&str], correct: usize) -> Question {
    Question {
        correct_answer_index: Some(correct),
        ..entry(id, text, options)
    }
}

fn tagged(id: usize, dichotomy: Dichotomy, text: &str, first: &str, second: &str) -> Question {
    Question {
        dimension: Some(dichotomy),
        ..entry(id, text, &[first, second])
    }
}

fn iq_questions() -> Vec<Question> {
    vec![
        keyed(
            1,
            "What comes next in the sequence: 2, 6, 12, 20, 30, ?",
            &["42", "40", "38", "44"],
            0,
        ),
        keyed(
            2,
            "If all Bloops are Razzles and all Razzles are Lazzles, then all Bloops are definitely Lazzles.",
            &["True", "False"],
            0,
        ),
        keyed(
            3,
            "Which number should replace the question mark: 3, 7, 15, 31, ?",
            &["63", "47", "55", "62"],
            0,
        ),
        keyed(
            4,
            "A car travels 60 miles in 1 hour. How many miles will it travel in 45 minutes?",
            &["45", "50", "40", "55"],
            0,
        ),
        keyed(
            5,
            "Which word does not belong: Apple, Banana, Carrot, Orange",
            &["Apple", "Banana", "Carrot", "Orange"],
            2,
        ),
        keyed(
            6,
            "If 5 machines make 5 widgets in 5 minutes, how long would it take 100 machines to make 100 widgets?",
            &["5 minutes", "100 minutes", "20 minutes", "1 minute"],
            0,
        ),
        keyed(
            7,
            "What is the next letter in this sequence: A, D, G, J, ?",
            &["M", "K", "L", "N"],
            0,
        ),
        keyed(
            8,
            "Which number is missing: 1, 1, 2, 3, 5, 8, ?",
            &["11", "13", "15", "10"],
            1,
        ),
        keyed(
            9,
            "If you rearrange the letters \"CIFAIPC\", you would have the name of a(n):",
            &["Ocean", "Country", "City", "Animal"],
            0,
        ),
        keyed(
            10,
            "What comes next: 1, 4, 9, 16, 25, ?",
            &["36", "30", "35", "49"],
            0,
        ),
    ]
}

// Options are ordered from least to most emotionally intelligent response.
fn eq_questions() -> Vec<Question> {
    vec![
        entry(
            1,
            "When a friend is upset, what is your first instinct?",
            &[
                "Give practical advice to solve the problem",
                "Change the subject to cheer them up",
                "Share a similar experience you had",
                "Listen and offer emotional support",
            ],
        ),
        entry(
            2,
            "How do you typically handle stress?",
            &[
                "Keep busy to distract myself",
                "Analyze the situation logically",
                "Talk it out with friends or family",
                "Take time to process emotions before reacting",
            ],
        ),
        entry(
            3,
            "In a group setting, you usually:",
            &[
                "Take charge of the situation",
                "Focus on the task at hand",
                "Try to keep the mood light",
                "Notice how everyone is feeling",
            ],
        ),
        entry(
            4,
            "When someone disagrees with you, you:",
            &[
                "Avoid the confrontation",
                "Stand firm in your position",
                "Find a compromise quickly",
                "Try to understand their perspective",
            ],
        ),
        entry(
            5,
            "How do you recognize your own emotions?",
            &[
                "Others point them out to me",
                "I notice physical sensations first",
                "I analyze my thoughts and behavior",
                "I regularly check in with myself",
            ],
        ),
        entry(
            6,
            "When you make a mistake that affects others, you:",
            &[
                "Explain why it happened",
                "Try to fix it quickly",
                "Apologize and learn from it",
                "Take full responsibility and make amends",
            ],
        ),
        entry(
            7,
            "How do you respond when someone is angry with you?",
            &[
                "Get defensive and argue back",
                "Walk away until they calm down",
                "Try to understand why they're upset",
                "Stay calm and listen to their concerns",
            ],
        ),
        entry(
            8,
            "When working in a team, you:",
            &[
                "Focus on getting the job done",
                "Make sure everyone contributes equally",
                "Help resolve conflicts between members",
                "Ensure everyone feels heard and valued",
            ],
        ),
        entry(
            9,
            "How do you handle criticism?",
            &[
                "Take it personally and feel hurt",
                "Dismiss it if you disagree",
                "Consider if there's truth in it",
                "Thank them and reflect on the feedback",
            ],
        ),
        entry(
            10,
            "When you're feeling overwhelmed, you:",
            &[
                "Push through and ignore the feeling",
                "Complain to others about your situation",
                "Take a break and practice self-care",
                "Identify the source and create a plan",
            ],
        ),
    ]
}

#[rustfmt::skip]
fn personality_questions() -> Vec<Question> {
    use Dichotomy::{
        ExtraversionIntroversion as EI, JudgingPerceiving as JP, SensingIntuition as SN,
        ThinkingFeeling as TF,
    };

    let items: [(Dichotomy, &str, &str, &str); 40] = [
        (EI, "At a party, you would rather:", "Meet new people and socialize with many", "Have deep conversations with a few close friends"),
        (EI, "You feel more energized when:", "Being around other people", "Spending time alone"),
        (EI, "When making decisions, you prefer to:", "Talk it through with others", "Think it through privately first"),
        (EI, "In group settings, you typically:", "Speak up and share your thoughts readily", "Listen more and speak when you have something important to say"),
        (EI, "You prefer to:", "Have a wide circle of acquaintances", "Have a small circle of close friends"),
        (EI, "After a long day, you prefer to:", "Go out and be around people", "Stay home and relax quietly"),
        (EI, "When working on a project, you prefer to:", "Collaborate with a team", "Work independently"),
        (EI, "You tend to:", "Think out loud", "Think before speaking"),
        (EI, "At work or school, you:", "Enjoy being the center of attention", "Prefer to work behind the scenes"),
        (EI, "When learning something new, you prefer:", "Group discussions and activities", "Reading and individual study"),
        (SN, "You tend to focus on:", "Facts and details", "Possibilities and big picture"),
        (SN, "When learning something new, you prefer:", "Step-by-step instructions", "Understanding the overall concept first"),
        (SN, "You're more interested in:", "What is actually happening", "What could potentially happen"),
        (SN, "You trust:", "Experience and proven methods", "Inspiration and new approaches"),
        (SN, "You prefer work that involves:", "Practical applications", "Theoretical concepts"),
        (SN, "When reading, you prefer:", "Factual information and how-to guides", "Fiction and imaginative stories"),
        (SN, "You are more likely to:", "Notice specific details in your environment", "See patterns and connections"),
        (SN, "When solving problems, you:", "Use tried and tested methods", "Look for innovative solutions"),
        (SN, "You prefer to:", "Focus on the present moment", "Think about future possibilities"),
        (SN, "Your memory tends to focus on:", "Specific facts and details", "General impressions and meanings"),
        (TF, "When making decisions, you prioritize:", "Logic and objective analysis", "Values and how it affects people"),
        (TF, "You're more convinced by:", "Logical reasoning", "Emotional appeals"),
        (TF, "In conflicts, you tend to:", "Focus on finding the most logical solution", "Consider everyone's feelings and find harmony"),
        (TF, "You value:", "Fairness and justice", "Compassion and mercy"),
        (TF, "When giving feedback, you:", "Focus on what needs to be improved", "Consider how the person might feel"),
        (TF, "You prefer to be seen as:", "Competent and logical", "Caring and understanding"),
        (TF, "When analyzing a situation, you first consider:", "The facts and logical implications", "The people involved and their feelings"),
        (TF, "You are more motivated by:", "Achievement and competence", "Appreciation and harmony"),
        (TF, "In arguments, you:", "Focus on the logical points", "Try to understand different perspectives"),
        (TF, "You prefer criticism that is:", "Direct and honest", "Gentle and considerate"),
        (JP, "You prefer to:", "Plan things in advance", "Keep your options open"),
        (JP, "Your ideal weekend is:", "Planned with scheduled activities", "Spontaneous and flexible"),
        (JP, "You work best when:", "Following a clear schedule", "Working at your own pace"),
        (JP, "You prefer:", "Having things settled and decided", "Keeping things open for new information"),
        (JP, "When starting a project, you:", "Make a detailed plan first", "Jump in and figure it out as you go"),
        (JP, "Your workspace tends to be:", "Organized and tidy", "Flexible and adaptable"),
        (JP, "You prefer deadlines that are:", "Clear and firm", "Flexible and negotiable"),
        (JP, "When traveling, you prefer to:", "Have a detailed itinerary", "Go with the flow and explore"),
        (JP, "You feel more comfortable when:", "Things are decided and settled", "Options remain open"),
        (JP, "Your approach to time is:", "Structured and punctual", "Flexible and relaxed"),
    ];

    items
        .into_iter()
        .enumerate()
        .map(|(index, (dichotomy, text, first, second))| {
            tagged(index + 1, dichotomy, text, first, second)
        })
        .collect()
}
