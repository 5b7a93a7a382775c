use crate::eval::EvalError;
use crate::parser::RpnExpr;
use crate::traverse::Traversal;
use crate::tree::ExprTree;
use lexers::ExprToken;

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => {
        assert!(($lhs - $rhs).abs() < 1.0e-10)
    };
}

fn tree(expr: &str) -> ExprTree {
    ExprTree::parse(expr).unwrap().unwrap()
}

#[test]
fn eval_basics() {
    fuzzy_eq!(tree("3 + 4 * (2 - 1)").eval().unwrap(), 7.0);
    fuzzy_eq!(tree("(3+4)*3").eval().unwrap(), 21.0);
    fuzzy_eq!(tree("7 / 2").eval().unwrap(), 3.5);
    fuzzy_eq!(tree("10 - 2 - 3").eval().unwrap(), 5.0);
}

// precedence comparison uses >=, so '^' groups (2^3)^2 rather than the
// mathematical 2^(3^2)
#[test]
fn eval_power_left_assoc() {
    fuzzy_eq!(tree("2 ^ 3 ^ 2").eval().unwrap(), 64.0);
    fuzzy_eq!(tree("2 ^ (3 ^ 2)").eval().unwrap(), 512.0);
}

#[test]
fn eval_fractional_and_negative_exponents() {
    fuzzy_eq!(tree("4 ^ 0.5").eval().unwrap(), 2.0);
    fuzzy_eq!(tree("2 ^ (0 - 3)").eval().unwrap(), 0.125);
}

// division by zero propagates IEEE-754 infinity instead of erroring
#[test]
fn eval_division_by_zero() {
    let value = tree("5 / 0").eval().unwrap();
    assert!(value.is_infinite() && value.is_sign_positive());
    assert!(tree("0 / 0").eval().unwrap().is_nan());
}

#[test]
fn eval_is_idempotent() {
    let t = tree("3 + 4 * (2 - 1)");
    let first = t.eval().unwrap();
    let second = t.eval().unwrap();
    assert_eq!(first, second);
}

#[test]
fn eval_recorded_matches_postorder() {
    let t = tree("3 + 4 * (2 - 1)");
    let ev = t.eval_recorded().unwrap();
    fuzzy_eq!(ev.value, 7.0);
    assert_eq!(ev.visits, t.visit_order(Traversal::Postfix));
    assert_eq!(ev.visits.len(), t.len());
    assert_eq!(ev.results.len(), t.len());
    fuzzy_eq!(ev.results[&t.root()], ev.value);
    fuzzy_eq!(ev.value, t.eval().unwrap());
}

#[test]
fn eval_recorded_tracks_subresults() {
    let t = tree("(1 + 2) * (3 + 4)");
    let ev = t.eval_recorded().unwrap();
    fuzzy_eq!(ev.value, 21.0);
    let mut subvalues = ev
        .results
        .values()
        .cloned()
        .collect::<Vec<_>>();
    subvalues.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(subvalues, vec![1.0, 2.0, 3.0, 3.0, 4.0, 7.0, 21.0]);
}

// the builder accepts any operator token, evaluation is where an
// unsupported symbol finally surfaces
#[test]
fn eval_rejects_unknown_operators() {
    let rpn = RpnExpr(vec![
        ExprToken::Number(1.0),
        ExprToken::Number(2.0),
        ExprToken::BOp(format!("%")),
    ]);
    let t = ExprTree::build(&rpn).unwrap().unwrap();
    assert_eq!(t.eval(), Err(EvalError::BadOp(format!("%"))));
    assert_eq!(
        t.eval_recorded().unwrap_err(),
        EvalError::BadOp(format!("%"))
    );
}
