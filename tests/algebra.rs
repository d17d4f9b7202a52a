use algeo::{
    domains::{number::AlgebraNumber, NumberKind, Value},
    object::Object,
    operation::{AlgebraOperation, OperationKind},
    poly::Polynomial,
    Error,
};

#[test]
fn natural_round_trip() {
    for n in (1..1000).step_by(37).chain([i64::MAX]) {
        let a = AlgebraNumber::new(n, NumberKind::Natural).unwrap();
        assert_eq!(a.value(), &Value::from(n));
    }

    let r = AlgebraNumber::new(-1.25, NumberKind::Real).unwrap();
    assert_eq!(r.value(), &Value::Real(-1.25));
}

#[test]
fn widest_kind_wins() {
    let op = AlgebraOperation::from_name("add").unwrap();
    let r = op
        .evaluate(&[
            AlgebraNumber::new(3, NumberKind::Natural).unwrap(),
            AlgebraNumber::new(2.5, NumberKind::Real).unwrap(),
        ])
        .unwrap();

    assert_eq!(r.kind(), NumberKind::Real);
    assert_eq!(r.value(), &Value::Real(5.5));
}

#[test]
fn exact_division_is_integer() {
    let op = AlgebraOperation::new(OperationKind::Divide);
    let r = op
        .evaluate(&[
            AlgebraNumber::natural(10).unwrap(),
            AlgebraNumber::natural(2).unwrap(),
        ])
        .unwrap();

    assert_eq!(r, AlgebraNumber::integer(5).unwrap());

    assert_eq!(
        op.evaluate(&[
            AlgebraNumber::natural(5).unwrap(),
            AlgebraNumber::natural(1).unwrap(),
        ]),
        Ok(AlgebraNumber::integer(5).unwrap())
    );
}

#[test]
fn inexact_division_is_nearest_real() {
    let op = AlgebraOperation::new(OperationKind::Divide);
    let r = op
        .evaluate(&[
            AlgebraNumber::natural(1).unwrap(),
            AlgebraNumber::natural(10).unwrap(),
        ])
        .unwrap();

    assert_eq!(r.kind(), NumberKind::Real);
    assert_eq!(r.value(), &Value::Real(0.1));
}

#[test]
fn division_by_zero() {
    let op = AlgebraOperation::new(OperationKind::Divide);

    // a natural zero cannot be constructed, so use an integer zero
    assert!(AlgebraNumber::natural(0).is_err());
    assert_eq!(
        op.evaluate(&[
            AlgebraNumber::natural(5).unwrap(),
            AlgebraNumber::integer(0).unwrap(),
        ]),
        Err(Error::DivisionByZero)
    );
}

#[test]
fn operator_switching() {
    let a = AlgebraNumber::integer(-6).unwrap();
    let b = AlgebraNumber::natural(4).unwrap();
    let mut op = AlgebraOperation::default();

    let mut results = vec![];
    for k in OperationKind::ALL {
        op.change_operator(k);
        results.push(op.evaluate(&[a.clone(), b.clone()]).unwrap());
    }

    assert_eq!(
        results,
        [
            AlgebraNumber::integer(-2).unwrap(),
            AlgebraNumber::integer(-10).unwrap(),
            AlgebraNumber::integer(-24).unwrap(),
            AlgebraNumber::real(-1.5),
        ]
    );
}

#[test]
fn dynamic_arguments() {
    let op = AlgebraOperation::new(OperationKind::Multiply);

    let r = op.call(&[
        AlgebraNumber::natural(6).unwrap().into(),
        AlgebraNumber::natural(7).unwrap().into(),
    ]);
    assert_eq!(r, Ok(AlgebraNumber::natural(42).unwrap()));

    for bad in [Object::from(7), Object::from(true), Object::from("7")] {
        assert!(matches!(
            op.call(&[AlgebraNumber::natural(6).unwrap().into(), bad]),
            Err(Error::InvalidArguments(_))
        ));
    }
}

#[test]
fn polynomial_evaluation() {
    let p = Polynomial::new([1, 2, 3, 4]).unwrap();
    assert_eq!(
        p.evaluate(&AlgebraNumber::natural(1).unwrap()),
        AlgebraNumber::integer(10).unwrap()
    );
    assert_eq!(
        p.evaluate(&AlgebraNumber::integer(-2).unwrap()),
        AlgebraNumber::integer(-2).unwrap()
    );
    assert_eq!(
        p.evaluate(&AlgebraNumber::real(0.5)),
        AlgebraNumber::real(6.125)
    );

    assert_eq!(
        p.call(&Object::from(Polynomial::new([1]).unwrap())),
        Err(Error::InvalidArgument(algeo::object::ObjectKind::Polynomial))
    );
}

#[test]
fn polynomial_of_operation_result() {
    let sum = AlgebraOperation::default()
        .evaluate(&[
            AlgebraNumber::natural(1).unwrap(),
            AlgebraNumber::natural(2).unwrap(),
        ])
        .unwrap();

    // x^2 - 9 vanishes at 3
    let p = Polynomial::new([1, 0, -9]).unwrap();
    assert_eq!(p.evaluate(&sum), AlgebraNumber::integer(0).unwrap());
}
