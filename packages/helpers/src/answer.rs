use cosmwasm_std::{attr, Attribute, Coin, Event, Response, Uint128};

/// Event type `<contract_name>-<ty>`, emitted once per handled message.
pub fn contract_event(contract_name: &str, ty: &str) -> Event {
    Event::new(format!("{contract_name}-{ty}"))
}

pub fn response<A: Into<Attribute>, T>(
    ty: &str,
    contract_name: &str,
    attrs: impl IntoIterator<Item = A>,
) -> Response<T> {
    Response::<T>::new().add_event(contract_event(contract_name, ty).add_attributes(attrs))
}

/// `1000untrn`
pub fn attr_coin(key: impl Into<String>, amount: Uint128, denom: &str) -> Attribute {
    attr(key, Coin::new(amount.u128(), denom).to_string())
}

/// Comma separated list of coins, `1000untrn,5uatom`.
pub fn attr_coins(key: impl Into<String>, coins: &[Coin]) -> Attribute {
    let value = coins
        .iter()
        .map(Coin::to_string)
        .collect::<Vec<_>>()
        .join(",");
    attr(key, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::{coin, Empty};

    #[test]
    fn response_prefixes_event_type_with_contract_name() {
        let res: Response<Empty> =
            response("execute-deposit", "coin-exchanger", [attr("sender", "alice")]);
        assert_eq!(
            res.events,
            vec![Event::new("coin-exchanger-execute-deposit").add_attribute("sender", "alice")]
        );
    }

    #[test]
    fn attr_coin_glues_amount_and_denom() {
        assert_eq!(
            attr_coin("deposit", Uint128::new(100), "untrn"),
            attr("deposit", "100untrn")
        );
    }

    #[test]
    fn attr_coins_joins_every_denom() {
        assert_eq!(
            attr_coins("amount", &[coin(1_000, "untrn"), coin(5, "uatom")]),
            attr("amount", "1000untrn,5uatom")
        );
    }
}
