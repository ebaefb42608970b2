// End-to-end tests for the Narrator Backend API
//
// Each test gets its own server on an ephemeral port, wired exactly like
// `main` except for two collaborators:
// - an in-memory object store instead of S3
// - a fake speech synthesis client instead of AWS Polly
//
// The fake echoes each chunk's SSML back as its "audio", so the bytes of an
// assembled stream show which chunks were synthesized and in what order.

mod test_articles;
mod test_health;
