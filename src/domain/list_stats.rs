//! Aggregate statistics over a list of blog entries.
//!
//! Pure, synchronous functions: no I/O, no shared state. Callers hand in a
//! stable snapshot of blog records and get plain values back. The empty
//! list is a normal input, not an error.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Serialize;

use crate::domain::entities::Blog;

/// Author paired with how many blog entries they have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBlogs {
    pub author: String,
    pub blogs: i64,
}

/// Author paired with their summed like count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: i64,
}

/// Sums the likes across all blog entries. Returns 0 for an empty list.
///
/// The result does not depend on the order of the input.
pub fn total_likes(blogs: &[Blog]) -> i64 {
    blogs.iter().map(|blog| blog.likes).sum()
}

/// Returns the entry with the most likes, or `None` for an empty list.
///
/// When several entries share the maximum, the first one in input order
/// wins.
pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    blogs
        .iter()
        .reduce(|best, blog| if blog.likes > best.likes { blog } else { best })
}

/// Returns the author with the most blog entries, or `None` for an empty
/// list.
///
/// Ties are resolved in favor of the author that appears first in the
/// input.
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogs> {
    max_by_author(blogs, |_| 1).map(|(author, blogs)| AuthorBlogs {
        author: author.to_string(),
        blogs,
    })
}

/// Returns the author with the highest summed like count, or `None` for an
/// empty list.
///
/// Ties are resolved in favor of the author that appears first in the
/// input.
pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    max_by_author(blogs, |blog| blog.likes).map(|(author, likes)| AuthorLikes {
        author: author.to_string(),
        likes,
    })
}

/// Accumulates `value` per author in one pass, then scans the authors in
/// first-occurrence order for the maximum.
///
/// The scan order is tracked explicitly; map iteration order is never
/// relied on.
fn max_by_author<'a>(blogs: &'a [Blog], value: impl Fn(&Blog) -> i64) -> Option<(&'a str, i64)> {
    let mut totals: HashMap<&str, i64> = HashMap::new();
    let mut seen_order: Vec<&str> = Vec::new();

    for blog in blogs {
        match totals.entry(blog.author.as_str()) {
            Entry::Occupied(mut entry) => *entry.get_mut() += value(blog),
            Entry::Vacant(entry) => {
                entry.insert(value(blog));
                seen_order.push(blog.author.as_str());
            }
        }
    }

    let mut best: Option<(&str, i64)> = None;
    for author in seen_order {
        let total = totals[author];
        if best.is_none_or(|(_, best_total)| total > best_total) {
            best = Some((author, total));
        }
    }

    best
}
