//! Local heuristics that need no collaborator: text checks for the text path,
//! URL checks for the URL path.

pub mod text;
pub mod url;
