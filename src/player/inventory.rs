use crate::utils::error::InventoryError;
use crate::world::block::BlockType;
use serde::{Deserialize, Serialize};

/// Slots 0..HOTBAR_SIZE are directly selectable.
pub const HOTBAR_SIZE: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub block: BlockType,
    pub count: u32,
}

impl ItemStack {
    pub fn new(block: BlockType, count: u32) -> Self {
        Self { block, count }
    }
}

/// Ordered list of stacks. At most one stack per block type; empty stacks
/// are dropped so later slots shift down.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<ItemStack>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The kit a fresh session starts with.
    pub fn starter() -> Self {
        Self::from_stacks([
            ItemStack::new(BlockType::Wood, 64),
            ItemStack::new(BlockType::Dirt, 64),
            ItemStack::new(BlockType::Stone, 64),
            ItemStack::new(BlockType::CraftingTable, 5),
            ItemStack::new(BlockType::LEVER, 10),
            ItemStack::new(BlockType::REDSTONE_LAMP, 10),
        ])
    }

    pub fn from_stacks(stacks: impl IntoIterator<Item = ItemStack>) -> Self {
        let mut inventory = Self::new();
        for stack in stacks {
            inventory.add(stack.block, stack.count);
        }
        inventory
    }

    pub fn slots(&self) -> &[ItemStack] {
        &self.slots
    }

    pub fn hotbar(&self) -> &[ItemStack] {
        &self.slots[..self.slots.len().min(HOTBAR_SIZE)]
    }

    /// Stack in a hotbar slot, `None` for an empty slot.
    pub fn slot(&self, index: usize) -> Option<&ItemStack> {
        self.hotbar().get(index)
    }

    pub fn count_of(&self, block: BlockType) -> u32 {
        self.slots
            .iter()
            .find(|stack| stack.block == block)
            .map_or(0, |stack| stack.count)
    }

    pub fn has(&self, block: BlockType, amount: u32) -> bool {
        self.count_of(block) >= amount
    }

    pub fn add(&mut self, block: BlockType, amount: u32) {
        if amount == 0 {
            return;
        }
        match self.slots.iter_mut().find(|stack| stack.block == block) {
            Some(stack) => stack.count = stack.count.saturating_add(amount),
            None => self.slots.push(ItemStack::new(block, amount)),
        }
    }

    /// Takes `amount` of `block`, failing without side effects when short.
    pub fn remove(&mut self, block: BlockType, amount: u32) -> Result<(), InventoryError> {
        let have = self.count_of(block);
        if have < amount {
            return Err(InventoryError::Insufficient {
                block: block.name().to_string(),
                have,
                need: amount,
            });
        }
        if let Some(index) = self.slots.iter().position(|stack| stack.block == block) {
            self.slots[index].count -= amount;
            if self.slots[index].count == 0 {
                self.slots.remove(index);
            }
        }
        Ok(())
    }
}
