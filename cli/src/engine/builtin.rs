//! # Built-in Tables
//!
//! File: cli/src/engine/builtin.rs
//!
//! The classic therapist table set used when no configuration file supplies
//! its own tables. Keywords end in a space where a following word is
//! expected, so "i am " does not fire on "i amaze".
//!
use super::tables::{GoodbyePhrase, KeywordEntry, Messages, ReflectionPair, ReplyRing, Tables};

pub const GREETING: &str = "Hi! I'm your new therapist. My name is Eliza. What's your problem?";
pub const REPEAT_WARNING: &str = "Please don't repeat yourself!";
pub const ELABORATE_FALLBACK: &str = "Please elaborate more on that.";

/// Ring answered by the catch-all keyword.
pub const DEFAULT_RING: u32 = 30;

pub fn default_messages() -> Messages {
    Messages {
        greeting: GREETING.to_string(),
        repeat_warning: REPEAT_WARNING.to_string(),
        elaborate_fallback: ELABORATE_FALLBACK.to_string(),
    }
}

pub fn default_tables() -> Tables {
    Tables {
        keywords: keywords(),
        replies: replies(),
        reflections: reflections(),
        goodbyes: goodbyes(),
    }
}

fn keywords() -> Vec<KeywordEntry> {
    [
        ("can you ", 1),
        ("can i ", 2),
        ("you are ", 3),
        ("you're ", 3),
        ("i don't ", 4),
        ("i feel ", 5),
        ("why don't you ", 6),
        ("why can't i ", 7),
        ("are you ", 8),
        ("i can't ", 9),
        ("i am ", 10),
        ("i'm ", 10),
        ("you ", 11),
        ("i want ", 12),
        ("what ", 13),
        ("how ", 13),
        ("who ", 13),
        ("where ", 13),
        ("when ", 13),
        ("why ", 13),
        ("name ", 14),
        ("cause ", 15),
        ("sorry ", 16),
        ("dream ", 17),
        ("hello ", 18),
        ("hi ", 18),
        ("maybe ", 19),
        (" no ", 20),
        ("your ", 21),
        ("always ", 22),
        ("think ", 23),
        ("alike ", 24),
        ("yes ", 25),
        ("friend", 26),
        ("computer", 27),
        ("robot", 27),
        ("smartphone", 28),
        ("father ", 29),
        ("mother ", 29),
        ("sister ", 29),
        ("brother ", 29),
        ("", DEFAULT_RING),
    ]
    .into_iter()
    .map(|(keyword, ring)| KeywordEntry::new(keyword, ring))
    .collect()
}

fn replies() -> Vec<ReplyRing> {
    vec![
        ReplyRing::new(
            1,
            &[
                "Don't you believe that I can*?",
                "Perhaps you would like to be able to*?",
                "You want me to be able to*?",
            ],
        ),
        ReplyRing::new(
            2,
            &["Perhaps you don't want to*?", "Do you want to be able to*?"],
        ),
        ReplyRing::new(
            3,
            &[
                "What makes you think I am*?",
                "Does it please you to believe I am*?",
                "Perhaps you would like to be*?",
                "Do you sometimes wish you were*?",
            ],
        ),
        ReplyRing::new(
            4,
            &[
                "Don't you really*?",
                "Why don't you*?",
                "Do you wish to be able to*?",
                "Does that trouble you?",
            ],
        ),
        ReplyRing::new(
            5,
            &[
                "Do you often feel*?",
                "Do you enjoy feeling*?",
                "Tell me more about such feelings.",
            ],
        ),
        ReplyRing::new(
            6,
            &[
                "Do you really believe I don't*?",
                "Perhaps in good time I will*.",
                "Do you want me to*?",
            ],
        ),
        ReplyRing::new(
            7,
            &["Do you think you should be able to*?", "Why can't you*?"],
        ),
        ReplyRing::new(
            8,
            &[
                "Why are you interested in whether or not I am*?",
                "Would you prefer if I were not*?",
                "Perhaps in your fantasies I am*?",
            ],
        ),
        ReplyRing::new(
            9,
            &[
                "How do you know you can't*?",
                "Have you tried?",
                "Perhaps you can now*.",
            ],
        ),
        ReplyRing::new(
            10,
            &[
                "Did you come to me because you are*?",
                "How long have you been*?",
                "Do you believe it is normal to be*?",
                "Do you enjoy being*?",
            ],
        ),
        ReplyRing::new(
            11,
            &[
                "We were discussing you, not me.",
                "Oh, I*?",
                "You're not really talking about me, are you?",
            ],
        ),
        ReplyRing::new(
            12,
            &[
                "What would it mean to you if you got*?",
                "Why do you want*?",
                "Suppose you soon got*?",
                "What if you never got*?",
                "I sometimes also want*.",
            ],
        ),
        ReplyRing::new(
            13,
            &[
                "Why do you ask?",
                "Does that question interest you?",
                "What answer would please you the most?",
                "What do you think?",
                "Are such questions on your mind often?",
                "What is it that you really want to know?",
                "Have you asked anyone else?",
                "Have you asked such questions before?",
                "What else comes to mind when you ask that?",
            ],
        ),
        ReplyRing::new(
            14,
            &[
                "Names don't interest me.",
                "I don't care about names, please go on.",
            ],
        ),
        ReplyRing::new(
            15,
            &[
                "Is that the real reason?",
                "Don't any other reasons come to mind?",
                "Does that reason explain anything else?",
                "What other reasons might there be?",
            ],
        ),
        ReplyRing::new(
            16,
            &[
                "Please don't apologize!",
                "Apologies are not necessary.",
                "What feelings do you have when you apologize?",
                "Don't be so defensive!",
            ],
        ),
        ReplyRing::new(
            17,
            &[
                "What does that dream suggest to you?",
                "Do you dream often?",
                "What persons appear in your dreams?",
                "Are you disturbed by your dreams?",
            ],
        ),
        ReplyRing::new(18, &["How do you do... please state your problem."]),
        ReplyRing::new(
            19,
            &[
                "You don't seem quite certain.",
                "Why the uncertain tone?",
                "Can't you be more positive?",
                "You aren't sure?",
                "Don't you know?",
            ],
        ),
        ReplyRing::new(
            20,
            &[
                "Are you saying no just to be negative?",
                "You are being a bit negative.",
                "Why not?",
                "Are you sure?",
                "Why no?",
            ],
        ),
        ReplyRing::new(
            21,
            &["Why are you concerned about my*?", "What about your own*?"],
        ),
        ReplyRing::new(
            22,
            &[
                "Can you think of a specific example?",
                "When?",
                "What are you thinking of?",
                "Really, always?",
            ],
        ),
        ReplyRing::new(
            23,
            &[
                "Do you really think so?",
                "But you are not sure you*?",
                "Do you doubt you*?",
            ],
        ),
        ReplyRing::new(
            24,
            &[
                "In what way?",
                "What resemblance do you see?",
                "What does the similarity suggest to you?",
                "What other connections do you see?",
                "Could there really be some connection?",
                "How?",
            ],
        ),
        ReplyRing::new(
            25,
            &[
                "You seem quite positive.",
                "Are you sure?",
                "I see.",
                "I understand.",
            ],
        ),
        ReplyRing::new(
            26,
            &[
                "Why do you bring up the topic of friends?",
                "Do your friends worry you?",
                "Do your friends pick on you?",
                "Are you sure you have any friends?",
                "Do you impose on your friends?",
                "Perhaps your love for friends worries you.",
            ],
        ),
        ReplyRing::new(
            27,
            &[
                "Do computers worry you?",
                "Are you talking about me in particular?",
                "Are you frightened by machines?",
                "Why do you mention computers?",
                "What do you think machines have to do with your problem?",
                "Don't you think computers can help people?",
                "What is it about machines that worries you?",
            ],
        ),
        ReplyRing::new(
            28,
            &[
                "Do you sometimes feel uneasy without a smartphone?",
                "Have you had these phantasies before?",
                "Does the world seem more real for you via apps?",
            ],
        ),
        ReplyRing::new(
            29,
            &[
                "Tell me more about your family.",
                "Who else in your family*?",
                "What does family mean to you?",
                "Do you often think about your family?",
            ],
        ),
        ReplyRing::new(
            DEFAULT_RING,
            &[
                "Say, do you have any psychological problems?",
                "What does that suggest to you?",
                "I see.",
                "I'm not sure I understand you fully.",
                "Come, come, elucidate your thoughts.",
                "Can you elaborate on that?",
                "That is quite interesting.",
            ],
        ),
    ]
}

/// Pairs are applied in this order. Second-person forms are turned into
/// first-person forms with a capital "I" first, which the lowercase
/// first-person patterns further down can no longer match. "your", "yours"
/// and "yourself" go through an uppercase placeholder for the same reason and
/// are lowered again by the last pairs, after "my" has become "your".
fn reflections() -> Vec<ReflectionPair> {
    [
        (" you are ", " I am "),
        (" you were ", " I was "),
        (" you're ", " I'm "),
        (" you've ", " I've "),
        (" you ", " I "),
        (" your ", " MY "),
        (" yours ", " MINE "),
        (" yourself ", " MYSELF "),
        (" i am ", " you are "),
        (" i was ", " you were "),
        (" i'm ", " you're "),
        (" i've ", " you've "),
        (" i'd ", " you'd "),
        (" i'll ", " you'll "),
        (" i ", " you "),
        (" my ", " your "),
        (" me ", " you "),
        (" myself ", " yourself "),
        (" mine ", " yours "),
        (" MY ", " my "),
        (" MINE ", " mine "),
        (" MYSELF ", " myself "),
    ]
    .into_iter()
    .map(|(from, to)| ReflectionPair::new(from, to))
    .collect()
}

fn goodbyes() -> Vec<GoodbyePhrase> {
    [
        ("shut up", "Okay. I'll leave you alone now."),
        ("bye", "Goodbye. It was nice talking to you."),
        ("thank you", "You're welcome. Take care of yourself."),
        (" quit ", "Very well. Goodbye."),
    ]
    .into_iter()
    .map(|(trigger, farewell)| GoodbyePhrase::new(trigger, farewell))
    .collect()
}
