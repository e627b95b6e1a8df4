mod merge_conflicting_edits;
mod merge_disjoint_edits;
mod merge_fast_forward_and_ancestor;
mod merge_rejections;
