//! Shorthand constructors for building trees without `Box::new` noise.

use crate::{Chance, Condition, Inverter, Node, Roll, Selector, Sequence};

#[inline]
pub fn sequence<'n, C: 'n>(children: Vec<Node<'n, C>>) -> Node<'n, C> {
    Box::new(Sequence::new(children))
}

#[inline]
pub fn selector<'n, C: 'n>(children: Vec<Node<'n, C>>) -> Node<'n, C> {
    Box::new(Selector::new(children))
}

#[inline]
pub fn inverter<'n, C: 'n>(child: Node<'n, C>) -> Node<'n, C> {
    Box::new(Inverter::new(child))
}

#[inline]
pub fn chance<'n, C: Roll + 'n>(probability: f32, child: Node<'n, C>) -> Node<'n, C> {
    Box::new(Chance::new(probability, child))
}

#[inline]
pub fn condition<'n, C: 'n>(predicate: fn(&C) -> bool) -> Node<'n, C> {
    Box::new(Condition::new(predicate))
}

/// Negated [`condition`].
#[inline]
pub fn unless<'n, C: 'n>(predicate: fn(&C) -> bool) -> Node<'n, C> {
    inverter(condition(predicate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Behavior, Status};

    struct Ctx {
        hits: u32,
        lucky: bool,
    }

    impl Roll for Ctx {
        fn roll(&mut self, _probability: f32) -> bool {
            self.lucky
        }
    }

    struct Hit;
    impl Behavior<Ctx> for Hit {
        fn tick(&self, ctx: &mut Ctx) -> Status {
            ctx.hits += 1;
            Status::Success
        }
    }

    #[test]
    fn priority_list_falls_through_failed_draw() {
        let tree: Node<'_, Ctx> = selector(vec![
            chance(0.9, Box::new(Hit)),
            sequence(vec![unless(|ctx: &Ctx| ctx.lucky), Box::new(Hit), Box::new(Hit)]),
        ]);

        let mut ctx = Ctx {
            hits: 0,
            lucky: false,
        };
        assert_eq!(tree.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.hits, 2);

        let mut ctx = Ctx {
            hits: 0,
            lucky: true,
        };
        assert_eq!(tree.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.hits, 1);
    }
}
