//! End-to-end scenario tests driving the engine through its public
//! pointer API, with a recording surface where rendering assertions are
//! needed.
