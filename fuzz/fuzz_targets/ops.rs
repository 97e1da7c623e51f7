#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::{
    arbitrary::{self, Arbitrary},
    fuzz_target,
};

use blist::BList;

#[derive(Arbitrary, Copy, Clone, Debug)]
enum Op {
    PushBack(i32),
    PushFront(i32),
    Insert(u16, i32),
    Remove(u16),
    Set(u16, i32),
    Clear,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut list: BList<i32, 8> = BList::new();
    let mut reference: VecDeque<i32> = VecDeque::new();

    for op in ops {
        match op {
            Op::PushBack(value) => {
                list.push_back(value);
                reference.push_back(value);
            }
            Op::PushFront(value) => {
                list.push_front(value);
                reference.push_front(value);
            }
            Op::Insert(pos, value) => {
                let pos = pos as usize % (reference.len() + 1);
                list.insert(pos, value);
                reference.insert(pos, value);
            }
            Op::Remove(pos) => {
                if !reference.is_empty() {
                    let pos = pos as usize % reference.len();
                    assert_eq!(list.remove(pos), reference.remove(pos).unwrap());
                }
            }
            Op::Set(pos, value) => {
                if !reference.is_empty() {
                    let pos = pos as usize % reference.len();
                    list[pos] = value;
                    reference[pos] = value;
                }
            }
            Op::Clear => {
                list.clear();
                reference.clear();
            }
        }

        assert_eq!(list.len(), reference.len());
        list.assert_invariants();
        assert!(list.iter().eq(reference.iter()));
    }

    assert!(list.iter().rev().eq(reference.iter().rev()));
});
