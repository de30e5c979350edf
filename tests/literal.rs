use rcdcl::*;

#[test]
#[should_panic]
fn constructor_fails_for_zero(){
    Literal::from(0);
}

#[test]
fn constructor_work_for_positive(){
    assert_eq!("Literal(1)", format!("{:?}", Literal::from(1)));
}
#[test]
fn constructor_work_for_negative(){
    assert_eq!("Literal(-1)", format!("{:?}", Literal::from(-1)));
}
#[test]
fn constructor_work_for_var(){
    assert_eq!(lit(1),  Literal::from_var(var(1), Polarity::Asserted));
    assert_eq!(lit(-1), Literal::from_var(var(1), Polarity::Negated));
}
#[test]
fn var_returns_the_original_var(){
    let v = var(42);

    assert_eq!(v, Literal::positive(v).var());
    assert_eq!(v, Literal::negative(v).var());
}
#[test]
fn polarity_follows_the_sign(){
    assert_eq!(Polarity::Asserted, lit(3).polarity());
    assert_eq!(Polarity::Negated,  lit(-3).polarity());
}
#[test]
fn negation_flips_the_polarity_only(){
    let l = lit(7);

    assert_eq!(lit(-7), !l);
    assert_eq!(lit(-7), -l);
    assert_eq!(l, !!l);
    assert_eq!(l.var(), (!l).var());
}
#[test]
fn display_uses_tilde_for_negation(){
    assert_eq!("x3",  lit(3).to_string());
    assert_eq!("~x3", lit(-3).to_string());
}
