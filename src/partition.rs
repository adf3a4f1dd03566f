use crate::WikiError;

/// Splits `items` into consecutive chunks of `size`, keeping order.
///
/// The last chunk may be shorter. Used to respect per-request limits such as
/// the 50-title cap on `titles=`.
pub fn partition<I>(items: I, size: usize) -> Result<Vec<Vec<I::Item>>, WikiError>
where
    I: IntoIterator,
{
    if size == 0 {
        return Err(WikiError::Config(
            "partition size must be positive".to_owned(),
        ));
    }

    let mut chunks = Vec::new();
    let mut current = Vec::with_capacity(size);
    for item in items {
        current.push(item);
        if current.len() == size {
            chunks.push(std::mem::replace(&mut current, Vec::with_capacity(size)));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    Ok(chunks)
}
