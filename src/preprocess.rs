/// Drops `#` line comments, keeping the newline so positions stay meaningful.
pub fn comments_removed(mut s: String) -> String {
    #[derive(Copy, Clone)]
    enum State {
        Outside,
        LineComment,
    }
    use State::*;
    let mut state = Outside;
    s.retain(|c| {
        let (new_state, retain) = match (state, c) {
            (Outside, '#') => (LineComment, false),
            (LineComment, '\n') => (Outside, true),
            (Outside, _) => (Outside, true),
            (LineComment, _) => (LineComment, false),
        };
        state = new_state;
        retain
    });
    s
}
