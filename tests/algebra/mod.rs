//! Laws of the expression algebra, observed through the rows it materializes to.
use relp_rows::{Comparison, ConstraintType, Error, Expression, LinearExpression, ScratchBuffers, Sum, Summand, Variable};

fn materialize(expression: impl Into<LinearExpression>) -> (Vec<usize>, Vec<f64>) {
    let mut buffers = ScratchBuffers::new();
    buffers.materialize(&expression.into()).unwrap().to_owned()
}

fn sample() -> Sum {
    Variable::new(1) * 2_f64 + Variable::new(3) - Summand::new(2, 0.5_f64)
}

#[test]
fn addition_is_concatenation() {
    let (a, b, c) = (Variable::new(1), Summand::new(2, 3_f64), Variable::new(4) + Variable::new(1));

    let left = materialize((a + b) + c.clone());
    let right = materialize(a + (b + c));
    assert_eq!(left, right);
    assert_eq!(left, (vec![1, 2, 4, 1], vec![1_f64, 3_f64, 1_f64, 1_f64]));
}

#[test]
fn negation() {
    let (columns, coefficients) = materialize(sample());
    let (negated_columns, negated_coefficients) = materialize(-sample());
    assert_eq!(columns, negated_columns);
    assert_eq!(negated_coefficients, coefficients.iter().map(|c| -c).collect::<Vec<_>>());

    let (columns, coefficients) = materialize(sample() - sample());
    assert_eq!(columns, vec![1, 3, 2, 1, 3, 2]);
    assert_eq!(coefficients, vec![2_f64, 1_f64, -0.5_f64, -2_f64, -1_f64, 0.5_f64]);
}

#[test]
fn scaling_distributes() {
    let (_, coefficients) = materialize(sample());
    for factor in [3_f64, 0_f64, -1.5_f64] {
        let (columns, scaled) = materialize(sample() * factor);
        assert_eq!(columns, vec![1, 3, 2]);
        assert_eq!(scaled, coefficients.iter().map(|c| c * factor).collect::<Vec<_>>());
    }

    // Scaling twice multiplies the factors
    assert_eq!(materialize((Variable::new(5) * 2_f64) * 3_f64), (vec![5], vec![6_f64]));
    assert_eq!(materialize(2_f64 * Summand::new(5, -1_f64)), (vec![5], vec![-2_f64]));
}

#[test]
fn buffers_are_reused() {
    let mut buffers = ScratchBuffers::new();
    for length in [3, 1, 5] {
        let sum = (1..=length).map(|column| Summand::new(column, column as f64)).collect::<Sum>();
        let row = buffers.materialize(&sum.into()).unwrap();
        assert_eq!(row.count(), length);
        assert_eq!(row.column_indices(), (1..=length).collect::<Vec<_>>().as_slice());
    }
    assert_eq!(buffers.capacity(), 5);
}

#[test]
fn not_equal_is_rejected() {
    assert_eq!(Variable::new(1).not_equal(1_f64), Err(Error::UnsupportedRelation));
    assert_eq!(Summand::new(1, 2_f64).not_equal(1_f64), Err(Error::UnsupportedRelation));
    assert_eq!(sample().not_equal(1_f64), Err(Error::UnsupportedRelation));
    assert_eq!(sample().compare(Comparison::NotEqual, 0_f64), Err(Error::UnsupportedRelation));
    assert_eq!(Error::UnsupportedRelation.code(), "RELATION_UNSUPPORTED");
}

#[test]
fn relations() {
    for constraint in [
        Variable::new(1).less_or_equal(1_f64),
        Summand::new(1, 2_f64).less_or_equal(1_f64),
        sample().less_or_equal(1_f64),
    ] {
        assert_eq!(constraint.constraint_type(), ConstraintType::Less);
    }
    assert_eq!(Variable::new(1).greater_or_equal(0_f64).constraint_type(), ConstraintType::Greater);
    assert_eq!(sample().equal_to(0_f64).constraint_type(), ConstraintType::Equal);
    assert_eq!(sample().compare(Comparison::GreaterOrEqual, 2_f64).unwrap().right_hand_side(), 2_f64);
}

#[test]
fn empty_sum() {
    assert_eq!(materialize(Sum::empty()), (vec![], vec![]));
    assert_eq!(materialize(-Sum::empty() * 2_f64), (vec![], vec![]));
    assert_eq!(materialize(Sum::empty() + Variable::new(4)), materialize(Sum::from(Variable::new(4))));
}

#[test]
fn in_place() {
    let mut sum = Sum::empty();
    sum += Variable::new(1);
    sum -= Summand::new(2, 2_f64);
    sum *= 2_f64;
    assert_eq!(materialize(sum), (vec![1, 2], vec![2_f64, -4_f64]));
}
