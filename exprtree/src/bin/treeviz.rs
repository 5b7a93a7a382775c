mod repl {
    use exprtree::{ExprNode, ExprTree, LayoutParams, NodeId, Traversal};

    fn node_label(tree: &ExprTree, id: NodeId) -> String {
        match tree.node(id) {
            ExprNode::Num(num) => format!("{}", num),
            ExprNode::Op(op, _, _) => op.clone(),
        }
    }

    fn show_tree(tree: &ExprTree) {
        println!("infix:   {}", tree.render(Traversal::Infix));
        println!("prefix:  {}", tree.render(Traversal::Prefix));
        println!("postfix: {}", tree.render(Traversal::Postfix));
        match tree.eval() {
            Err(e) => println!("Eval error: {}", e),
            Ok(value) => println!("value:   {}", value),
        }
    }

    // the step-by-step view a GUI would animate, one node per tick
    fn walk(tree: &ExprTree, kind: Traversal) {
        let steps = tree
            .visit_order(kind)
            .into_iter()
            .map(|id| node_label(tree, id))
            .collect::<Vec<_>>();
        println!("{}", steps.join(" -> "));
    }

    fn eval_steps(tree: &ExprTree) {
        match tree.eval_recorded() {
            Err(e) => println!("Eval error: {}", e),
            Ok(ev) => {
                for id in &ev.visits {
                    println!("{:>10} = {}", node_label(tree, *id), ev.results[id]);
                }
                println!("value: {}", ev.value);
            }
        }
    }

    fn show_layout(tree: &ExprTree) {
        let positions = tree.layout(&LayoutParams::default());
        for id in tree.visit_order(Traversal::Infix) {
            let (x, y) = positions[&id];
            println!("{:>10} at ({}, {})", node_label(tree, id), x, y);
        }
    }

    pub fn evalexpr(input: &str) {
        match ExprTree::parse(input) {
            Err(e) => println!("Parse error: {}", e),
            Ok(None) => println!("empty expression"),
            Ok(Some(tree)) => show_tree(&tree),
        };
    }

    // Commands starting with ':' replay the current tree; anything else
    // parses as a new expression. A failed parse keeps the current tree.
    pub fn statement(current: &mut Option<ExprTree>, input: &str) {
        let line = input.trim();
        if line.is_empty() {
            return;
        }
        if let Some(cmd) = line.strip_prefix(':') {
            match current {
                None => println!("no expression yet"),
                Some(tree) => match cmd.trim() {
                    "walk prefix" => walk(tree, Traversal::Prefix),
                    "walk infix" => walk(tree, Traversal::Infix),
                    "walk postfix" => walk(tree, Traversal::Postfix),
                    "eval" => eval_steps(tree),
                    "layout" => show_layout(tree),
                    other => println!(
                        "unknown command ':{}' (try :walk prefix|infix|postfix, :eval, :layout)",
                        other
                    ),
                },
            }
            return;
        }
        match ExprTree::parse(line) {
            Err(e) => println!("Parse error: {}", e),
            Ok(None) => println!("empty expression"),
            Ok(Some(tree)) => {
                show_tree(&tree);
                *current = Some(tree);
            }
        };
    }
}

fn main() {
    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        repl::evalexpr(&input[..]);
    } else {
        let histpath = dirs::home_dir().map(|home| home.join(".treeviz_history"));
        let mut rl = rustyline::Editor::<()>::new();
        if let Some(ref histpath) = histpath {
            let _ = rl.load_history(histpath);
        }
        let mut current = None;
        while let Ok(input) = rl.readline(">> ") {
            rl.add_history_entry(input.as_str());
            repl::statement(&mut current, &input[..]);
        }
        if let Some(ref histpath) = histpath {
            let _ = rl.save_history(histpath);
        }
    }
}
