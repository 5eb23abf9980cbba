use crate::player::inventory::Inventory;
use crate::utils::error::InventoryError;
use crate::world::block::BlockType;
use log::info;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CraftingError {
    #[error("Crafting requires an open crafting table")]
    StationClosed,

    #[error("No recipe produces {0}")]
    RecipeNotFound(String),

    #[error("Missing ingredient {block}: need {needed}, have {have}")]
    MissingIngredient {
        block: String,
        needed: u32,
        have: u32,
    },

    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ingredient {
    pub block: BlockType,
    pub count: u32,
}

impl Ingredient {
    pub const fn new(block: BlockType, count: u32) -> Self {
        Self { block, count }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    pub result: BlockType,
    pub result_count: u32,
    pub ingredients: &'static [Ingredient],
}

pub const RECIPES: &[Recipe] = &[
    Recipe {
        result: BlockType::CraftingTable,
        result_count: 1,
        ingredients: &[Ingredient::new(BlockType::Wood, 4)],
    },
    Recipe {
        result: BlockType::REDSTONE_LAMP,
        result_count: 1,
        ingredients: &[
            Ingredient::new(BlockType::Stone, 4),
            Ingredient::new(BlockType::Gold, 1),
        ],
    },
    Recipe {
        result: BlockType::LEVER,
        result_count: 1,
        ingredients: &[
            Ingredient::new(BlockType::Stone, 1),
            Ingredient::new(BlockType::Wood, 1),
        ],
    },
    Recipe {
        result: BlockType::Obsidian,
        result_count: 1,
        ingredients: &[
            Ingredient::new(BlockType::Stone, 4),
            Ingredient::new(BlockType::Lava, 1),
        ],
    },
];

pub fn find_recipe(result: BlockType) -> Result<&'static Recipe, CraftingError> {
    RECIPES
        .iter()
        .find(|recipe| recipe.result == result)
        .ok_or_else(|| CraftingError::RecipeNotFound(result.name().to_string()))
}

/// Every ingredient is checked before anything is consumed.
pub fn can_craft(inventory: &Inventory, recipe: &Recipe) -> Result<(), CraftingError> {
    for ingredient in recipe.ingredients {
        let have = inventory.count_of(ingredient.block);
        if have < ingredient.count {
            return Err(CraftingError::MissingIngredient {
                block: ingredient.block.name().to_string(),
                needed: ingredient.count,
                have,
            });
        }
    }
    Ok(())
}

/// Returns the inventory after consuming the ingredients and adding the result.
pub fn craft(inventory: &Inventory, recipe: &Recipe) -> Result<Inventory, CraftingError> {
    can_craft(inventory, recipe)?;

    let mut next = inventory.clone();
    for ingredient in recipe.ingredients {
        next.remove(ingredient.block, ingredient.count)?;
    }
    next.add(recipe.result, recipe.result_count);

    info!("Crafted {}x {}", recipe.result_count, recipe.result);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lever_recipe() {
        let inventory = Inventory::starter();
        let recipe = find_recipe(BlockType::LEVER).unwrap();
        let crafted = craft(&inventory, recipe).unwrap();

        assert_eq!(crafted.count_of(BlockType::LEVER), 11);
        assert_eq!(crafted.count_of(BlockType::Stone), 63);
        assert_eq!(crafted.count_of(BlockType::Wood), 63);
        assert_eq!(inventory.count_of(BlockType::LEVER), 10);
    }

    #[test]
    fn test_missing_ingredient_consumes_nothing() {
        let inventory = Inventory::starter();
        let recipe = find_recipe(BlockType::REDSTONE_LAMP).unwrap();
        let err = craft(&inventory, recipe).unwrap_err();
        assert_eq!(
            err,
            CraftingError::MissingIngredient {
                block: "gold".into(),
                needed: 1,
                have: 0
            }
        );
    }

    #[test]
    fn test_lamp_with_gold() {
        let mut inventory = Inventory::starter();
        inventory.add(BlockType::Gold, 1);
        let recipe = find_recipe(BlockType::REDSTONE_LAMP).unwrap();
        let crafted = craft(&inventory, recipe).unwrap();
        assert_eq!(crafted.count_of(BlockType::Gold), 0);
        assert_eq!(crafted.count_of(BlockType::REDSTONE_LAMP), 11);
    }

    #[test]
    fn test_unknown_recipe() {
        assert_eq!(
            find_recipe(BlockType::Diamond),
            Err(CraftingError::RecipeNotFound("diamond".into()))
        );
    }

    #[test]
    fn test_new_result_gets_new_slot() {
        let inventory = Inventory::from_stacks([
            crate::player::inventory::ItemStack::new(BlockType::Stone, 4),
            crate::player::inventory::ItemStack::new(BlockType::Lava, 1),
        ]);
        let crafted = craft(&inventory, find_recipe(BlockType::Obsidian).unwrap()).unwrap();
        assert_eq!(crafted.slots().len(), 1);
        assert_eq!(crafted.count_of(BlockType::Obsidian), 1);
    }
}
