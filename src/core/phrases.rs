use eyre::eyre;
use rand::Rng;
use rand::rngs::ThreadRng;

/// Stock replies used when a chip is sent without mentions.
pub const DEFAULT_PHRASES: &[&str] = &[
    "You're welcome!",
    "Enjoy!",
    "Here you are!",
    "Here's your Chroma Chip!",
    "Nice one!",
    "Colo(u)rs!",
    "Huetiful!",
    "There you go!",
    "What's better than chips? Chroma Chips!",
    "Looking good!",
    "No probs!",
    "I made this especially for you!",
    "Great!",
];

/// Upper bound on random draws before falling back to the next phrase in order.
const MAX_DRAWS: usize = 16;

/// Chooses the phrase for a reply that has no mentions.
///
/// Implementations should avoid returning the same phrase twice in a row.
pub trait PhrasePicker {
    fn pick(&mut self) -> String;
}

/// Picks uniformly at random, never repeating the previous phrase when
/// another distinct phrase exists.
///
/// The last-phrase memory is not synchronized; give each conversation its own
/// picker.
#[derive(Debug)]
pub struct RandomPhrasePicker<R = ThreadRng> {
    phrases: Vec<String>,
    last: Option<usize>,
    rng: R,
}

impl RandomPhrasePicker<ThreadRng> {
    pub fn new(phrases: Vec<String>) -> Result<Self, eyre::Report> {
        Self::with_rng(phrases, rand::thread_rng())
    }
}

impl<R: Rng> RandomPhrasePicker<R> {
    pub fn with_rng(phrases: Vec<String>, rng: R) -> Result<Self, eyre::Report> {
        if phrases.is_empty() {
            return Err(eyre!("Phrase list cannot be empty"));
        }
        Ok(Self {
            phrases,
            last: None,
            rng,
        })
    }

    fn is_repeat(&self, index: usize) -> bool {
        self.last
            .is_some_and(|last| self.phrases[last] == self.phrases[index])
    }

    fn next_index(&mut self) -> usize {
        let len = self.phrases.len();
        for _ in 0..MAX_DRAWS {
            let index = self.rng.gen_range(0..len);
            if !self.is_repeat(index) {
                return index;
            }
        }

        let start = self.last.map_or(0, |last| last + 1);
        (0..len)
            .map(|offset| (start + offset) % len)
            .find(|&index| !self.is_repeat(index))
            // Every phrase reads the same; repeating is unavoidable.
            .unwrap_or(start % len)
    }
}

impl<R: Rng> PhrasePicker for RandomPhrasePicker<R> {
    fn pick(&mut self) -> String {
        let index = self.next_index();
        self.last = Some(index);
        self.phrases[index].clone()
    }
}
