use crate::models::Question;

const PROMPT: &str = "What is net worth?";

const CHOICES: [&str; 4] = [
    "Your total assets minus your total liabilities.",
    "Your monthly income.",
    "The balance of your savings account.",
    "The total amount you owe on loans and credit cards.",
];

const FEEDBACK: &str = "Net worth is everything you own minus everything you owe.";

/// The question shown when no question file is given.
pub fn net_worth_question() -> Question {
    let choices = CHOICES.iter().map(|choice| choice.to_string()).collect();
    Question::new(PROMPT, choices, 0)
        .unwrap_or_else(|err| unreachable!("built-in question is valid: {err}"))
        .with_feedback(FEEDBACK)
}
