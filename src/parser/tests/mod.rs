//! Tests for the parser's lookahead, grammar and literal handling.

mod parser;
