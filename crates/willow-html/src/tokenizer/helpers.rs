//! Helper functions for the fragment tokenizer.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! This module contains utility functions used throughout the tokenizer:
//! - State transitions ("Switch to", "Reconsume in")
//! - Input/character handling ("Consume the next input character")
//! - Token emission ("Emit the current token")
//! - Duplicate attribute detection

use willow_common::warning::warn_once;

use super::core::{FragmentTokenizer, TokenizerState};
use super::token::Token;

// =============================================================================
// State Transition Helpers
// =============================================================================

impl FragmentTokenizer {
    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    ///
    /// "Switch to the X state"
    ///
    /// Transitions to a new state. The next character will be consumed on the
    /// next iteration of the main loop.
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    ///
    /// "Reconsume in the X state"
    ///
    /// Transitions to a new state without consuming the current character.
    /// The same character will be processed again in the new state.
    pub(super) const fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.state = new_state;
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl FragmentTokenizer {
    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    ///
    /// "Consume the next input character"
    ///
    /// Returns the character at the current position and advances the position.
    /// Returns None if we've reached the end of input.
    pub(super) fn consume(&mut self) -> Option<char> {
        if let Some(c) = self.input[self.current_pos..].chars().next() {
            self.current_pos += c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    /// Peek at a codepoint at the given offset from the current position without
    /// consuming it. Used for lookahead operations like "the next few characters are".
    #[must_use]
    pub(super) fn peek_codepoint(&self, offset: usize) -> Option<char> {
        let slice = &self.input[self.current_pos..];
        slice.chars().nth(offset)
    }

    /// Consume the given string from the input.
    /// Caller must have already verified the characters are present.
    pub(super) const fn consume_string(&mut self, target: &str) {
        // Advance by the number of bytes in the target string.
        // This is safe for ASCII strings (like "--").
        self.current_pos += target.len();
    }

    /// [§ 12.1.4 ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace)
    ///
    /// "ASCII whitespace is U+0009 TAB, U+000A LF, U+000C FF, U+000D CR,
    /// or U+0020 SPACE."
    ///
    /// NOTE: HTML tokenizer uses a subset excluding CR (which is normalized earlier).
    pub(super) const fn is_whitespace_char(input_char: char) -> bool {
        matches!(input_char, ' ' | '\t' | '\n' | '\x0C')
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl FragmentTokenizer {
    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    ///
    /// "Emit the current token" - adds the token to the output stream.
    pub(super) fn emit_token(&mut self) {
        self.drop_duplicate_attribute();
        if let Some(token) = self.current_token.take() {
            self.token_stream.push(token);
        }
    }

    /// "Emit the current input character as a character token."
    ///
    /// Emits a character token directly without going through `current_token`.
    pub(super) fn emit_character_token(&mut self, c: char) {
        self.token_stream.push(Token::new_character(c));
    }

    /// "Emit an end-of-file token."
    pub(super) fn emit_eof_token(&mut self) {
        self.token_stream.push(Token::new_eof());
    }
}

// =============================================================================
// Attribute and Error Helpers
// =============================================================================

impl FragmentTokenizer {
    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "If there is already an attribute on the token with the exact same name,
    /// then this is a duplicate-attribute parse error and the new attribute
    /// must be removed from the token."
    ///
    /// Called once the previous attribute is complete (when the next attribute
    /// starts, and at token emission) so that removal takes the duplicate's
    /// value with it instead of leaving stray appends on the earlier attribute.
    pub(super) fn drop_duplicate_attribute(&mut self) {
        let is_duplicate = self
            .current_token
            .as_ref()
            .is_some_and(Token::current_attribute_name_is_duplicate);
        if is_duplicate {
            self.log_parse_error("duplicate-attribute");
            if let Some(ref mut token) = self.current_token {
                token.remove_current_attribute();
            }
        }
    }

    /// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
    ///
    /// Input is trusted, so parse errors are recoverable anomalies: report each
    /// unique one through the shared warning channel and continue.
    pub(super) fn log_parse_error(&self, code: &str) {
        warn_once(
            "HTML",
            &format!("parse error '{code}' near byte {}", self.current_pos),
        );
    }
}
