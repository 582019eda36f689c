//! Test taggers shared by the integration tests

#![allow(dead_code)]

use cnlex_core::SequenceTagger;

/// Tags CJK positions with B/M/E/S by greedy longest match against a word
/// list. Non-CJK positions get "B" so that only the segmenter's forced tag
/// can make them atomic.
#[derive(Debug, Default)]
pub struct WordListTagger {
    words: Vec<Vec<String>>,
    rows: Vec<(String, String)>,
    tags: Vec<String>,
}

impl WordListTagger {
    pub fn new(words: &[&str]) -> Self {
        let mut words: Vec<Vec<String>> = words
            .iter()
            .map(|w| w.chars().map(|c| c.to_string()).collect())
            .collect();
        words.sort_by_key(|w| std::cmp::Reverse(w.len()));
        Self {
            words,
            ..Default::default()
        }
    }

    fn match_len(&self, at: usize) -> usize {
        for word in &self.words {
            let end = at + word.len();
            if end > self.rows.len() {
                continue;
            }
            let fits = self.rows[at..end]
                .iter()
                .zip(word)
                .all(|((text, label), ch)| label == "CN" && text == ch);
            if fits {
                return word.len();
            }
        }
        1
    }
}

impl SequenceTagger for WordListTagger {
    fn clear(&mut self) {
        self.rows.clear();
        self.tags.clear();
    }

    fn add(&mut self, line: &str) {
        let mut cols = line.split(' ');
        let text = cols.next().unwrap_or_default().to_string();
        let label = cols.next().unwrap_or_default().to_string();
        self.rows.push((text, label));
    }

    fn parse(&mut self) -> bool {
        self.tags.clear();
        let mut i = 0;
        while i < self.rows.len() {
            if self.rows[i].1 != "CN" {
                self.tags.push("B".to_string());
                i += 1;
                continue;
            }
            let len = self.match_len(i);
            if len == 1 {
                self.tags.push("S".to_string());
            } else {
                self.tags.push("B".to_string());
                for _ in 1..len - 1 {
                    self.tags.push("M".to_string());
                }
                self.tags.push("E".to_string());
            }
            i += len;
        }
        true
    }

    fn size(&self) -> usize {
        self.tags.len()
    }

    fn tag(&self, i: usize) -> Option<&str> {
        self.tags.get(i).map(String::as_str)
    }

    fn column(&self, i: usize, col: usize) -> Option<&str> {
        let (text, label) = self.rows.get(i)?;
        match col {
            0 => Some(text.as_str()),
            1 => Some(label.as_str()),
            _ => None,
        }
    }
}

/// Replays a fixed tag script; fails when `fail` is set
#[derive(Debug, Default)]
pub struct ScriptedTagger {
    pub script: Vec<String>,
    pub lines: Vec<String>,
    pub fail: bool,
    parsed: bool,
}

impl ScriptedTagger {
    pub fn new(script: &[&str]) -> Self {
        Self {
            script: script.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

impl SequenceTagger for ScriptedTagger {
    fn clear(&mut self) {
        self.lines.clear();
        self.parsed = false;
    }

    fn add(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn parse(&mut self) -> bool {
        self.parsed = !self.fail;
        self.parsed
    }

    fn size(&self) -> usize {
        if self.parsed {
            self.script.len()
        } else {
            0
        }
    }

    fn tag(&self, i: usize) -> Option<&str> {
        self.script.get(i).map(String::as_str)
    }

    fn column(&self, i: usize, col: usize) -> Option<&str> {
        self.lines.get(i)?.split(' ').nth(col)
    }
}

/// Configuration used across the integration tests
pub const TEST_CONFIG: &str = r#"
chinese_number = "零一二三四五六七八九"
chinese_number_end = "十百千万亿"
chinese_punctuation = "，。！？：；、“”《》（）"
crf_ending_tags = ["S", "E"]
"#;
