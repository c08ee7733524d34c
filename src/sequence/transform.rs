//! Element-wise transforms.
//!
//! Each transform produces a freshly allocated `Vec` whose position `i`
//! holds the image of input position `i`. The transform is invoked exactly
//! once per element, in order, and an empty input always yields an empty
//! (never absent) `Vec`.

/// Applies `function` to each element and collects the results.
///
/// The input is borrowed and never mutated. The output has the same length
/// as the input and is allocated once, up front.
///
/// # Arguments
///
/// * `collection` - The sequence to transform
/// * `function` - The transform applied to each element
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence::map;
///
/// struct Entry {
///     name: &'static str,
///     value: &'static str,
/// }
///
/// let entries = vec![
///     Entry { name: "test1", value: "value1" },
///     Entry { name: "test2", value: "value2" },
/// ];
///
/// let rendered = map(&entries, |entry| format!("{}:{}", entry.name, entry.value));
/// assert_eq!(rendered, vec!["test1:value1", "test2:value2"]);
/// ```
#[inline]
pub fn map<E, R, F>(collection: &[E], function: F) -> Vec<R>
where
    F: FnMut(&E) -> R,
{
    let mut result = Vec::with_capacity(collection.len());
    result.extend(collection.iter().map(function));
    result
}

/// Applies `function` to each element of an owned sequence, moving the
/// elements into it.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence::map_into;
///
/// let names = vec![String::from("a"), String::from("b")];
/// let wrapped = map_into(names, Some);
/// assert_eq!(wrapped, vec![Some("a".to_string()), Some("b".to_string())]);
/// ```
#[inline]
pub fn map_into<E, R, F>(collection: Vec<E>, function: F) -> Vec<R>
where
    F: FnMut(E) -> R,
{
    collection.into_iter().map(function).collect()
}

/// Applies a fallible `function` to each element.
///
/// Returns `Ok` with every result if all applications succeed. At the first
/// `Err` the traversal stops and that error is returned unchanged; later
/// elements are not visited.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence::try_map;
///
/// let parsed: Result<Vec<i32>, _> = try_map(&["1", "2", "3"], |text| text.parse::<i32>());
/// assert_eq!(parsed, Ok(vec![1, 2, 3]));
///
/// let failed: Result<Vec<i32>, _> = try_map(&["1", "x", "3"], |text| text.parse::<i32>());
/// assert!(failed.is_err());
/// ```
///
/// # Errors
///
/// Returns the first error produced by `function`.
pub fn try_map<E, R, Err, F>(collection: &[E], mut function: F) -> Result<Vec<R>, Err>
where
    F: FnMut(&E) -> Result<R, Err>,
{
    let mut result = Vec::with_capacity(collection.len());

    for (index, element) in collection.iter().enumerate() {
        match function(element) {
            Ok(value) => result.push(value),
            Err(error) => {
                tracing::debug!(
                    index,
                    length = collection.len(),
                    "transform returned an error; stopping"
                );
                return Err(error);
            }
        }
    }

    Ok(result)
}
