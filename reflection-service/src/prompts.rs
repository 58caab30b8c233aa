//! Persona instruction sent as the system prompt. Opaque to the service:
//! forwarded unchanged on every reflect call.

pub const SYSTEM_PROMPT: &str = include_str!("../prompts/reflection.txt");
