//! Prefix-tree dictionary
//!
//! Nodes live in a flat arena and point at their children by index, one slot
//! per letter of the alphabet. A node is terminal when it stores the word that
//! ends there; lookups compare against that stored text rather than trusting
//! the path alone.

use super::alphabet::{ALPHABET_SIZE, letter_index};

/// Handle to a node inside a [`Lexicon`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

#[derive(Debug, Clone, Default)]
struct Node {
    children: [Option<NodeId>; ALPHABET_SIZE],
    word: Option<Box<str>>,
}

/// Dictionary of valid words stored as a trie
#[derive(Debug, Clone)]
pub struct Lexicon {
    nodes: Vec<Node>,
    words: usize,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Create an empty lexicon holding only the root node
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            words: 0,
        }
    }

    /// The empty-string node every walk starts from
    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of distinct words stored
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }

    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Add a word, creating one node per letter as needed
    ///
    /// Characters outside `a..=z` are logged and skipped: they add no node,
    /// but the full text is still what the final node stores, so a word
    /// containing them can never match exactly. Such a word never displaces
    /// a different word already ending on the same node. Returns `true` if the
    /// word count grew.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut current = self.root();
        let mut skipped = false;
        for letter in word.bytes() {
            match letter_index(letter) {
                Ok(slot) => current = self.child_or_insert(current, slot),
                Err(err) => {
                    skipped = true;
                    log::warn!("skipping {err} while inserting {word:?}");
                }
            }
        }

        let node = &mut self.nodes[current.0 as usize];
        match node.word.as_deref() {
            None => {}
            Some(stored) if stored == word => return false,
            Some(stored) if skipped => {
                log::warn!("{word:?} collides with {stored:?} and was not stored");
                return false;
            }
            Some(_) => {
                // A clean word reclaims a node held by a skipped-character entry
                node.word = Some(word.into());
                return false;
            }
        }
        node.word = Some(word.into());
        self.words += 1;
        true
    }

    fn child_or_insert(&mut self, parent: NodeId, slot: usize) -> NodeId {
        if let Some(child) = self.nodes[parent.0 as usize].children[slot] {
            return child;
        }
        let child = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::default());
        self.nodes[parent.0 as usize].children[slot] = Some(child);
        child
    }

    /// Child of `node` along `letter`, if any word continues that way
    #[inline]
    #[must_use]
    pub fn child_at(&self, node: NodeId, letter: u8) -> Option<NodeId> {
        let slot = letter_index(letter).ok()?;
        self.nodes[node.0 as usize].children[slot]
    }

    /// Walk from the root along every letter of `prefix`
    #[must_use]
    pub fn find(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .bytes()
            .try_fold(self.root(), |node, letter| self.child_at(node, letter))
    }

    /// True if a stored word ends at `node`
    #[inline]
    #[must_use]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.0 as usize].word.is_some()
    }

    /// The word stored at `node`, if it is terminal
    #[inline]
    #[must_use]
    pub fn word_at(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0 as usize].word.as_deref()
    }

    /// True if `node` is terminal and stores exactly `word`
    #[inline]
    #[must_use]
    pub fn is_terminal_match(&self, node: NodeId, word: &str) -> bool {
        self.word_at(node) == Some(word)
    }

    /// Exact dictionary lookup
    ///
    /// # Examples
    /// ```
    /// use boggle_engine::core::Lexicon;
    ///
    /// let lexicon: Lexicon = ["cat", "cats"].into_iter().collect();
    /// assert!(lexicon.contains_exact("cat"));
    /// assert!(!lexicon.contains_exact("ca"));
    /// assert!(!lexicon.contains_exact("act"));
    /// ```
    #[must_use]
    pub fn contains_exact(&self, word: &str) -> bool {
        self.find(word)
            .is_some_and(|node| self.is_terminal_match(node, word))
    }
}

impl<S: AsRef<str>> Extend<S> for Lexicon {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut lexicon = Self::new();
        lexicon.extend(words);
        lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Lexicon {
        ["cat", "cats", "act", "tact", "a"].into_iter().collect()
    }

    #[test]
    fn inserted_words_are_found() {
        let lexicon = sample();
        for word in ["cat", "cats", "act", "tact", "a"] {
            assert!(lexicon.contains_exact(word), "{word} missing");
        }
        assert_eq!(lexicon.len(), 5);
    }

    #[test]
    fn permutations_are_not_found_unless_inserted() {
        let lexicon = sample();
        assert!(!lexicon.contains_exact("tac"));
        assert!(!lexicon.contains_exact("cta"));
        assert!(lexicon.contains_exact("act"));
    }

    #[test]
    fn prefixes_are_not_words() {
        let lexicon = sample();
        assert!(!lexicon.contains_exact("ca"));
        assert!(!lexicon.contains_exact("ta"));
        assert!(lexicon.find("ca").is_some());
        assert!(!lexicon.is_terminal(lexicon.find("ca").unwrap()));
    }

    #[test]
    fn empty_lexicon_finds_nothing() {
        let lexicon = Lexicon::new();
        assert!(lexicon.is_empty());
        assert!(!lexicon.contains_exact("cat"));
        assert!(!lexicon.contains_exact(""));
        assert_eq!(lexicon.node_count(), 1);
    }

    #[test]
    fn duplicate_insert_is_counted_once() {
        let mut lexicon = Lexicon::new();
        assert!(lexicon.insert("tea"));
        assert!(!lexicon.insert("tea"));
        assert!(!lexicon.insert(""));
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.node_count(), 4);
    }

    #[test]
    fn child_walk_follows_letters() {
        let lexicon = sample();
        let c = lexicon.child_at(lexicon.root(), b'c').unwrap();
        let ca = lexicon.child_at(c, b'a').unwrap();
        let cat = lexicon.child_at(ca, b't').unwrap();

        assert!(lexicon.is_terminal_match(cat, "cat"));
        assert!(!lexicon.is_terminal_match(cat, "cats"));
        assert!(!lexicon.is_terminal_match(ca, "ca"));
        assert_eq!(lexicon.word_at(cat), Some("cat"));
        assert_eq!(lexicon.child_at(cat, b'x'), None);
    }

    #[test]
    fn invalid_letters_have_no_child() {
        let lexicon = sample();
        assert_eq!(lexicon.child_at(lexicon.root(), b'C'), None);
        assert_eq!(lexicon.child_at(lexicon.root(), b'-'), None);
        assert!(!lexicon.contains_exact("Cat"));
    }

    #[test]
    fn invalid_characters_are_skipped_on_insert() {
        let mut lexicon = Lexicon::new();
        lexicon.insert("it's");

        // The apostrophe adds no node: the word ends on the "its" path
        let node = lexicon.find("its").unwrap();
        assert!(lexicon.is_terminal(node));
        assert!(!lexicon.contains_exact("its"));
        assert!(!lexicon.contains_exact("it's"));
    }

    #[test]
    fn skipped_characters_never_displace_a_word() {
        let mut lexicon = Lexicon::new();
        assert!(lexicon.insert("its"));
        assert!(!lexicon.insert("it's"));

        assert!(lexicon.contains_exact("its"));
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn clean_word_replaces_earlier_skipped_entry() {
        let mut lexicon = Lexicon::new();
        assert!(lexicon.insert("it's"));
        assert!(!lexicon.insert("its"));

        assert!(lexicon.contains_exact("its"));
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn extend_adds_words() {
        let mut lexicon = Lexicon::new();
        lexicon.extend(vec!["quit".to_string(), "queen".to_string()]);
        assert!(lexicon.contains_exact("quit"));
        assert!(lexicon.contains_exact("queen"));
        assert!(!lexicon.contains_exact("que"));
    }
}
