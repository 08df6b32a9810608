//! Chunk lists used from outside the crate, including as elements of other sequences.

use bumpalo::Bump;
use pretty_assertions::assert_eq;
use spanwalk_chunk_list::{ChunkList, ChunkListBuilder};
use spanwalk_core::{Cursor, Sequence, TraversalOptions, UNBOUNDED, algo};

fn words<'a>(arena: &'a Bump, chunk_len: usize, text: &str) -> ChunkList<'a, char> {
    let mut builder = ChunkListBuilder::new(arena, chunk_len);
    builder.extend(text.chars());
    builder.finish()
}

#[test]
fn views_never_span_chunks() {
    let arena = Bump::new();
    let list = words(&arena, 4, "hello, world");

    let mut lens = Vec::new();
    algo::traverse(&list, TraversalOptions { max_view_len: 3 }, |view| {
        lens.push(view.len())
    });
    assert_eq!(lens, [3, 1, 3, 1, 3, 1]);
}

#[test]
fn chunking_does_not_affect_equality() {
    let arena = Bump::new();
    let a = words(&arena, 2, "segmented");
    let b = words(&arena, 5, "segmented");
    let c = words(&arena, 5, "segmentes");
    assert!(algo::elements_equal(&a, &b));
    assert!(!algo::elements_equal(&a, &c));
}

#[test]
fn two_level_traversal() {
    let arena = Bump::new();
    let rows = vec![
        words(&arena, 3, "abcd"),
        words(&arena, 3, ""),
        words(&arena, 3, "efghijk"),
    ];

    let mut outer = rows.cursor();
    let mut flattened = String::new();
    loop {
        let view = outer.next_view(1);
        if view.is_empty() {
            break;
        }
        let mut inner = view[0].cursor();
        loop {
            let chars = inner.next_view(UNBOUNDED);
            if chars.is_empty() {
                break;
            }
            flattened.extend(chars.iter());
        }
    }
    assert_eq!(flattened, "abcdefghijk");
}

#[test]
fn search_and_fold() {
    let arena = Bump::new();
    let mut builder = ChunkListBuilder::new(&arena, 3);
    builder.extend([5u32, 1, 9, 4, 9, 2, 7]);
    let list = builder.finish();

    assert!(algo::contains(&list, &4));
    assert!(!algo::contains(&list, &3));
    assert_eq!(algo::min_element(&list), Some(1));
    assert_eq!(algo::max_element(&list), Some(9));
    assert_eq!(algo::fold(&list, 0, |acc, x| acc + x), 37);
    assert_eq!(algo::count(&list), 7);
}
