use crate::{SelfId, TokenSource, UuidTokenSource};

use std::collections::HashSet;

use googletest::prelude::*;

#[test]
fn given_same_token_when_derived_twice_then_same_id() {
    let first = SelfId::derive("token-1");
    let second = SelfId::derive("token-1");

    assert_that!(first, eq(&second));
    assert_that!(first.as_str().len(), eq(32));
}

#[test]
fn given_fresh_tokens_when_derived_then_ids_never_collide() {
    let source = UuidTokenSource;

    let ids: HashSet<SelfId> = (0..1_000)
        .map(|_| SelfId::derive(&source.next_token()))
        .collect();

    assert_that!(ids.len(), eq(1_000));
}
