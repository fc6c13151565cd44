use ordtrees::{AvlTree, BinarySearchTree};

fn main() {
    let mut bst = BinarySearchTree::new();
    for key in [50, 30, 70, 20, 40, 60, 80] {
        bst.insert(key);
    }
    assert!(bst.contains(&40));
    bst.remove(&50);
    assert!(!bst.contains(&50));

    println!("bst inorder: {:?}", bst.inorder());
    println!("bst height:  {}", bst.height());

    let mut avl = AvlTree::new();
    for key in 1..=100 {
        avl.insert(key);
    }
    println!("avl len:     {}", avl.len());
    println!("avl height:  {}", avl.height());
    println!("avl min/max: {:?} {:?}", avl.min(), avl.max());

    print!("{{ ");
    for key in avl.iter().take(5) {
        print!("{key}, ");
    }
    println!("... }}");
}
