use super::attempt::Attempt;

/// Orders pulls by their closing timestamp and renumbers them from 1.
///
/// The sort is stable, so pulls sharing a timestamp keep file order. Only
/// `pull` changes; headers are re-rendered from it on output.
pub fn resequence(mut attempts: Vec<Attempt>) -> Vec<Attempt> {
    attempts.sort_by_key(|attempt| attempt.timestamp);
    for (number, attempt) in (1u32..).zip(attempts.iter_mut()) {
        attempt.pull = number;
    }
    attempts
}
