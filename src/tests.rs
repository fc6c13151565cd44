use super::{AvlTree, BinarySearchTree, OrderedTree};

const N: i32 = 1_000;
const LARGE_N: i32 = 1_000_000;

#[test]
fn test_new() {
    let bst_i32 = BinarySearchTree::<i32>::new();
    assert!(bst_i32.is_empty());
    assert_eq!(bst_i32.len(), 0);
    assert_eq!(bst_i32.height(), 0);
    assert!(bst_i32.min().is_none());
    assert!(bst_i32.max().is_none());
    bst_i32.check_consistency();

    let bst_string = BinarySearchTree::<String>::new();
    assert!(bst_string.is_empty());
    bst_string.check_consistency();

    let avl_i32 = AvlTree::<i32>::new();
    assert!(avl_i32.is_empty());
    assert_eq!(avl_i32.len(), 0);
    assert_eq!(avl_i32.height(), 0);
    assert!(avl_i32.min().is_none());
    assert!(avl_i32.max().is_none());
    avl_i32.check_consistency();

    let avl_string = AvlTree::<String>::new();
    assert!(avl_string.is_empty());
    avl_string.check_consistency();
}

#[test]
fn test_avl_rebalance() {
    {
        //     3 ->   2
        //    /      / \
        //   2      1   3
        //  /
        // 1
        let mut tree = AvlTree::new();
        tree.insert(3);
        tree.insert(2);
        tree.insert(1);
        tree.check_consistency();
        assert_eq!(tree.height(), 2);
    }
    {
        //     3   ->     3 ->   2
        //    / \        /      / \
        //   2   4      2      1   3
        //  /          /
        // 1          1
        let mut tree = AvlTree::new();
        tree.insert(3);
        tree.insert(2);
        tree.insert(4);
        tree.insert(1);
        tree.check_consistency();
        assert_eq!(tree.height(), 3);
        tree.remove(&4);
        tree.check_consistency();
        assert_eq!(tree.height(), 2);
    }
    {
        //   3  ->   2
        //  /       / \
        // 1       1   3
        //  \
        //   2
        let mut tree = AvlTree::new();
        tree.insert(3);
        tree.insert(1);
        tree.insert(2);
        tree.check_consistency();
        assert_eq!(tree.height(), 2);
    }
    {
        //   3   ->   3  ->   2
        //  / \      /       / \
        // 1   4    1       1   3
        //  \        \
        //   2        2
        let mut tree = AvlTree::new();
        tree.insert(3);
        tree.insert(1);
        tree.insert(4);
        tree.insert(2);
        tree.check_consistency();
        assert_eq!(tree.height(), 3);
        tree.remove(&4);
        tree.check_consistency();
        assert_eq!(tree.height(), 2);
    }
    {
        // 1 ->    2
        //  \     / \
        //   2   1   3
        //    \
        //     3
        let mut tree = AvlTree::new();
        tree.insert(1);
        tree.insert(2);
        tree.insert(3);
        tree.check_consistency();
        assert_eq!(tree.height(), 2);
    }
    {
        //   1     -> 1     ->    2
        //  / \        \         / \
        // 0   2        2       1   3
        //      \        \
        //       3        3
        let mut tree = AvlTree::new();
        tree.insert(1);
        tree.insert(0);
        tree.insert(2);
        tree.insert(3);
        tree.check_consistency();
        assert_eq!(tree.height(), 3);
        tree.remove(&0);
        tree.check_consistency();
        assert_eq!(tree.height(), 2);
    }
    {
        // 1   ->  2
        //  \     / \
        //   3   1   3
        //  /
        // 2
        let mut tree = AvlTree::new();
        tree.insert(1);
        tree.insert(3);
        tree.insert(2);
        tree.check_consistency();
        assert_eq!(tree.height(), 2);
    }
    {
        //   1   ->  1   ->  2
        //  / \       \     / \
        // 0   3       3   1   3
        //    /       /
        //   2       2
        let mut tree = AvlTree::new();
        tree.insert(1);
        tree.insert(0);
        tree.insert(3);
        tree.insert(2);
        tree.check_consistency();
        assert_eq!(tree.height(), 3);
        tree.remove(&0);
        tree.check_consistency();
        assert_eq!(tree.height(), 2);
    }
}

#[test]
fn test_insert() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();
    values.sort();
    values.dedup();

    let mut bst = BinarySearchTree::new();
    let mut avl = AvlTree::new();
    for value in &values {
        assert!(bst.insert(*value));
        assert!(avl.insert(*value));
        bst.check_consistency();
        avl.check_consistency();
    }
    assert_eq!(bst.len(), values.len());
    assert_eq!(avl.len(), values.len());

    // Duplicates are rejected, not overwritten, and the size stays put
    for value in &values {
        assert!(!bst.insert(*value));
        assert!(!avl.insert(*value));
    }
    assert_eq!(bst.len(), values.len());
    assert_eq!(avl.len(), values.len());
}

#[test]
fn test_insert_sorted_range() {
    let mut avl = AvlTree::new();
    for value in 0..N {
        assert!(avl.insert(value));
        avl.check_consistency();
    }
    assert_eq!(avl.len(), N as usize);
    let bound = 1.45 * ((N + 2) as f64).log2();
    assert!((avl.height() as f64) <= bound);

    // The plain tree degenerates into a chain on the same input
    let mut bst = BinarySearchTree::new();
    for value in 0..100 {
        assert!(bst.insert(value));
    }
    bst.check_consistency();
    assert_eq!(bst.height(), 100);
}

#[test]
fn test_insert_shuffled_range() {
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    let mut values: Vec<i32> = (0..N).collect();
    let mut rng = StdRng::seed_from_u64(0);
    values.shuffle(&mut rng);

    let mut bst = BinarySearchTree::new();
    let mut avl = AvlTree::new();
    for value in &values {
        assert!(bst.insert(*value));
        assert!(avl.insert(*value));
        bst.check_consistency();
        avl.check_consistency();
    }

    for value in &values {
        assert!(!bst.insert(*value));
        assert!(!avl.insert(*value));
    }
    assert_eq!(bst.len(), values.len());
    assert_eq!(avl.len(), values.len());
}

#[test]
fn test_get() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();

    let mut bst = BinarySearchTree::new();
    let mut avl = AvlTree::new();
    assert!(bst.get(&42).is_none());
    assert!(avl.get(&42).is_none());
    for value in &values {
        bst.insert(*value);
        avl.insert(*value);
    }

    for value in &values {
        assert_eq!(bst.get(value), Some(value));
        assert_eq!(avl.get(value), Some(value));
        assert!(bst.contains(value));
        assert!(avl.contains(value));
    }
    assert!(bst.get(&-42).is_none());
    assert!(avl.get(&-42).is_none());
}

#[test]
fn test_bst_remove_shapes() {
    {
        // Leaf node
        let mut tree = BinarySearchTree::new();
        tree.extend([2, 1, 3]);
        assert!(tree.remove(&1));
        tree.check_consistency();
        assert_eq!(tree.inorder(), [&2, &3]);
    }
    {
        // Single right child is transplanted up
        let mut tree = BinarySearchTree::new();
        tree.extend([2, 1, 3, 4]);
        assert!(tree.remove(&3));
        tree.check_consistency();
        assert_eq!(tree.inorder(), [&1, &2, &4]);
    }
    {
        // Single left child is transplanted up
        let mut tree = BinarySearchTree::new();
        tree.extend([2, 1, 3, 0]);
        assert!(tree.remove(&1));
        tree.check_consistency();
        assert_eq!(tree.inorder(), [&0, &2, &3]);
    }
    {
        // Two children, successor is the immediate right child
        let mut tree = BinarySearchTree::new();
        tree.extend([2, 1, 3, 4]);
        assert!(tree.remove(&2));
        tree.check_consistency();
        assert_eq!(tree.inorder(), [&1, &3, &4]);
    }
    {
        // Two children, successor sits deeper in the right subtree and
        // must be transplanted out of its own position first
        let mut tree = BinarySearchTree::new();
        tree.extend([50, 30, 70, 20, 40, 60, 80]);
        assert!(tree.remove(&50));
        tree.check_consistency();
        assert_eq!(tree.inorder(), [&20, &30, &40, &60, &70, &80]);
        assert!(!tree.remove(&50));
    }
}

#[test]
fn test_remove() {
    use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();
    values.sort();
    values.dedup();

    let mut bst = BinarySearchTree::new();
    let mut avl = AvlTree::new();
    for value in &values {
        bst.insert(*value);
        avl.insert(*value);
    }

    values.shuffle(&mut rng);
    for value in &values {
        assert!(bst.contains(value));
        assert!(bst.remove(value));
        assert!(!bst.contains(value));
        bst.check_consistency();

        assert!(avl.contains(value));
        assert!(avl.remove(value));
        assert!(!avl.contains(value));
        avl.check_consistency();
    }
    assert!(bst.is_empty());
    assert!(avl.is_empty());
    assert_eq!(bst.len(), 0);
    assert_eq!(avl.len(), 0);
}

#[test]
fn test_remove_missing() {
    let mut bst = BinarySearchTree::new();
    let mut avl = AvlTree::new();
    assert!(!bst.remove(&1));
    assert!(!avl.remove(&1));
    bst.insert(1);
    avl.insert(1);
    assert!(!bst.remove(&2));
    assert!(!avl.remove(&2));
    assert_eq!(bst.len(), 1);
    assert_eq!(avl.len(), 1);
}

#[test]
fn test_reinsert_after_remove() {
    let mut bst = BinarySearchTree::new();
    let mut avl = AvlTree::new();
    for value in [50, 30, 70] {
        bst.insert(value);
        avl.insert(value);
    }

    assert!(bst.remove(&30));
    assert!(avl.remove(&30));
    assert!(!bst.contains(&30));
    assert!(!avl.contains(&30));

    assert!(bst.insert(30));
    assert!(avl.insert(30));
    assert!(bst.contains(&30));
    assert!(avl.contains(&30));
    bst.check_consistency();
    avl.check_consistency();
}

#[test]
fn test_traversal_orders() {
    let values = [50, 30, 70, 20, 40, 60, 80];

    let bst: BinarySearchTree<i32> = values.into_iter().collect();
    assert_eq!(bst.inorder(), [&20, &30, &40, &50, &60, &70, &80]);
    assert_eq!(bst.preorder(), [&50, &30, &20, &40, &70, &60, &80]);
    assert_eq!(bst.postorder(), [&20, &40, &30, &60, &80, &70, &50]);
    assert_eq!(bst.height(), 3);

    // This insertion order is already balanced, so the AVL tree ends up
    // with the identical shape
    let avl: AvlTree<i32> = values.into_iter().collect();
    assert_eq!(avl.inorder(), bst.inorder());
    assert_eq!(avl.preorder(), bst.preorder());
    assert_eq!(avl.postorder(), bst.postorder());
    assert_eq!(avl.height(), 3);
}

#[test]
fn test_sequential_insert_heights() {
    // The classic pathological input: monotonically increasing keys
    let mut avl = AvlTree::new();
    let mut bst = BinarySearchTree::new();
    for value in 1..=5 {
        avl.insert(value);
        bst.insert(value);
    }
    avl.check_consistency();
    bst.check_consistency();
    assert_eq!(avl.height(), 3);
    assert_eq!(bst.height(), 5);
}

#[test]
fn test_avl_remove_root() {
    let mut tree: AvlTree<i32> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    assert!(tree.remove(&50));
    tree.check_consistency();
    assert_eq!(tree.inorder(), [&20, &30, &40, &60, &70, &80]);
    assert_eq!(tree.len(), 6);
}

#[test]
fn test_min_max() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();

    let mut bst = BinarySearchTree::new();
    let mut avl = AvlTree::new();
    for value in &values {
        bst.insert(*value);
        avl.insert(*value);

        let inorder = bst.inorder();
        assert_eq!(bst.min(), inorder.first().copied());
        assert_eq!(bst.max(), inorder.last().copied());

        let inorder = avl.inorder();
        assert_eq!(avl.min(), inorder.first().copied());
        assert_eq!(avl.max(), inorder.last().copied());
    }

    assert_eq!(bst.min(), Some(values.iter().min().unwrap()));
    assert_eq!(bst.max(), Some(values.iter().max().unwrap()));
    assert_eq!(avl.min(), bst.min());
    assert_eq!(avl.max(), bst.max());
}

#[test]
fn test_clear() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();
    values.sort();
    values.dedup();

    let mut bst = BinarySearchTree::new();
    let mut avl = AvlTree::new();
    for value in &values {
        bst.insert(*value);
        avl.insert(*value);
    }
    assert!(!bst.is_empty());
    assert!(!avl.is_empty());

    bst.clear();
    avl.clear();
    assert!(bst.is_empty());
    assert!(avl.is_empty());
    assert_eq!(bst.len(), 0);
    assert_eq!(avl.len(), 0);
    assert_eq!(bst.height(), 0);
    assert_eq!(avl.height(), 0);

    for value in &values {
        assert!(bst.insert(*value));
        assert!(avl.insert(*value));
    }
    assert_eq!(bst.len(), values.len());
    assert_eq!(avl.len(), values.len());
    bst.check_consistency();
    avl.check_consistency();
}

#[test]
fn test_iter() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();

    let mut bst = BinarySearchTree::new();
    let mut avl = AvlTree::new();
    for value in &values {
        bst.insert(*value);
        avl.insert(*value);
    }

    values.sort();
    values.dedup();

    let from_bst: Vec<i32> = bst.iter().copied().collect();
    let from_avl: Vec<i32> = avl.iter().copied().collect();
    assert_eq!(from_bst, values);
    assert_eq!(from_avl, values);

    let mut value_iter = values.iter();
    for key in &bst {
        assert_eq!(Some(key), value_iter.next());
    }
    assert!(value_iter.next().is_none());

    let mut value_iter = values.iter();
    for key in &avl {
        assert_eq!(Some(key), value_iter.next());
    }
    assert!(value_iter.next().is_none());
}

// The illustrative index collaborators only ever talk to the trees through
// the shared contract; this exercises both variants through that seam.
fn check_contract<Tree: OrderedTree<i32> + Default>() {
    let mut tree = Tree::default();
    assert!(tree.is_empty());
    assert!(tree.min().is_none());
    assert!(tree.max().is_none());

    assert!(tree.insert(2));
    assert!(tree.insert(1));
    assert!(tree.insert(3));
    assert!(!tree.insert(2));
    assert_eq!(tree.len(), 3);

    assert!(tree.contains(&1));
    assert_eq!(tree.inorder(), [&1, &2, &3]);
    assert_eq!(tree.min(), Some(&1));
    assert_eq!(tree.max(), Some(&3));
    assert_eq!(tree.height(), 2);

    assert!(tree.remove(&2));
    assert!(!tree.remove(&2));
    assert!(!tree.contains(&2));
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.inorder(), [&1, &3]);
}

#[test]
fn test_ordered_tree_contract() {
    check_contract::<BinarySearchTree<i32>>();
    check_contract::<AvlTree<i32>>();
}

#[test]
#[ignore]
fn test_large() {
    use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..LARGE_N).map(|_| rng.gen_range(0..LARGE_N)).collect();

    let mut tree = AvlTree::new();
    for value in &values {
        tree.insert(*value);
    }
    tree.check_consistency();

    values.shuffle(&mut rng);
    values.resize(values.len() / 2, 0);
    for value in &values {
        tree.remove(value);
    }
    tree.check_consistency();
}
