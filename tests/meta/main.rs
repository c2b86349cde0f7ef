//! Meta tests that check properties of the repository itself.
